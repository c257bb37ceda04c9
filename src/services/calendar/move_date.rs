use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::calendar::requests::MoveActivityQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn move_activity(
    service: &CalendarService,
    request: &HttpRequest,
    schedule_id: i64,
    query: MoveActivityQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.move_activity(schedule_id, query.date).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Fecha actualizada"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            format!("No se encontró la actividad con ID {schedule_id}"),
        ))),
        Err(e) => {
            error!("Failed to move activity {}: {}", schedule_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al mover la actividad",
                )),
            )
        }
    }
}
