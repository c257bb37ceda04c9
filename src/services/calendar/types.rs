use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn activity_types(
    service: &CalendarService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activity_types().await {
        Ok(types) => Ok(HttpResponse::Ok().json(ApiResponse::success(types, "Activity types"))),
        Err(e) => {
            error!("Failed to load activity types: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener tipos de actividades",
                )),
            )
        }
    }
}

pub async fn holidays(
    _service: &CalendarService,
    _request: &HttpRequest,
    _year: i32,
) -> ActixResult<HttpResponse> {
    // 还没有节假日表；前端约定空集表示没有特殊日期
    let holidays: Vec<chrono::NaiveDate> = Vec::new();
    Ok(HttpResponse::Ok().json(ApiResponse::success(holidays, "Holidays")))
}
