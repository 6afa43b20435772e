use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, portfolio::application::domain::entities::Timeline,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Experience and education entries",
            body = inline(SuccessResponse<Timeline>)
        )
    )
)]
#[get("/api/timeline")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    let timeline = data.portfolio.get_timeline.execute().await;
    ApiResponse::success(timeline)
}
