use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CalendarService;
use crate::models::calendar::requests::{DateQuery, MonthQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn activities_on_date(
    service: &CalendarService,
    request: &HttpRequest,
    assignment_id: i64,
    query: DateQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.activities_on_date(assignment_id, query.date).await {
        Ok(activities) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(activities, "Activities")))
        }
        Err(e) => {
            error!(
                "Failed to load activities for assignment {} on {}: {}",
                assignment_id, query.date, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener actividades",
                )),
            )
        }
    }
}

pub async fn activities_in_month(
    service: &CalendarService,
    request: &HttpRequest,
    assignment_id: i64,
    query: MonthQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .activities_in_month(assignment_id, query.year, query.month)
        .await
    {
        Ok(activities) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(activities, "Activities")))
        }
        Err(e) if matches!(e, crate::errors::AulaError::Validation(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message().to_string(),
            )))
        }
        Err(e) => {
            error!(
                "Failed to load activities for assignment {} in {}-{}: {}",
                assignment_id, query.year, query.month, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener actividades",
                )),
            )
        }
    }
}

pub async fn group_activities_on_date(
    service: &CalendarService,
    request: &HttpRequest,
    group_id: i64,
    query: DateQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.group_activities_on_date(group_id, query.date).await {
        Ok(activities) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(activities, "Group activities")))
        }
        Err(e) => {
            error!(
                "Failed to load group {} activities on {}: {}",
                group_id, query.date, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al obtener actividades del grupo",
                )),
            )
        }
    }
}
