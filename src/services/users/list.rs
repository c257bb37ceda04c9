use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::users::requests::PersonListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_persons(
    service: &UserService,
    request: &HttpRequest,
    query: PersonListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_persons_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Persons"))),
        Err(e) => {
            error!("Failed to list persons: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener usuarios",
                )),
            )
        }
    }
}
