use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, portfolio::application::domain::entities::SkillGroup,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Skills grouped as design, tools, soft",
            body = inline(SuccessResponse<Vec<SkillGroup>>)
        )
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let groups = data.portfolio.get_skill_groups.execute().await;
    ApiResponse::success(groups)
}
