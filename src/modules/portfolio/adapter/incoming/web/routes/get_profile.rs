use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, portfolio::application::domain::entities::Profile,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Profile of the portfolio owner",
            body = inline(SuccessResponse<Profile>)
        )
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    let profile = data.portfolio.get_profile.execute().await;
    ApiResponse::success(profile)
}
