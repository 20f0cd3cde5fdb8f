use actix_web::{HttpResponse, get, web};

use crate::domain::category::Category;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::category as category_service;

#[utoipa::path(responses(
    (status = 200, description = "All categories", body = [Category])
))]
#[get("/categories")]
pub async fn list_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let categories = category_service::list_categories(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(categories))
}
