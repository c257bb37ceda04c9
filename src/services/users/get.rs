use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_person(
    service: &UserService,
    request: &HttpRequest,
    person_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_person_by_id(person_id).await {
        Ok(Some(person)) => Ok(HttpResponse::Ok().json(ApiResponse::success(person, "Person"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PersonNotFound,
            format!("Usuario con ID {person_id} no encontrado"),
        ))),
        Err(e) => {
            error!("Failed to load person {}: {}", person_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener usuario",
                )),
            )
        }
    }
}
