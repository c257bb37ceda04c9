//! 活动复制
//!
//! 一个新资源被所有目标班组共享：富文本复制一份，附件只复制关联。
//! 每个目标按自己的日期和时刻各建一条可见日程。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CalendarService;
use super::delete::check_schedule_creator;
use crate::middlewares::RequireJWT;
use crate::models::calendar::requests::{
    DuplicableQuery, DuplicateActivityRequest, DuplicateTargetsQuery,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn duplicable_activities(
    service: &CalendarService,
    request: &HttpRequest,
    query: DuplicableQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只列出调用教师自己的活动
    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };

    match storage.duplicable_activities(uid, query.subject_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "Duplicable activities"))),
        Err(e) => {
            error!("Failed to list duplicable activities: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al listar actividades",
                )),
            )
        }
    }
}

pub async fn duplicate_targets(
    service: &CalendarService,
    request: &HttpRequest,
    query: DuplicateTargetsQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.duplicate_target_groups(query.assignment_id).await {
        Ok(targets) => Ok(HttpResponse::Ok().json(ApiResponse::success(targets, "Duplicate targets"))),
        Err(e) => {
            error!("Failed to list duplicate targets: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al listar grupos",
                )),
            )
        }
    }
}

pub async fn duplicate_activity(
    service: &CalendarService,
    request: &HttpRequest,
    duplicate_request: DuplicateActivityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 至少一个目标班组
    if duplicate_request.targets.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DuplicateTargetsRequired,
            "Debe indicar al menos un grupo destino",
        )));
    }

    // 只有创建教师可以复制自己的活动
    let uid = match check_schedule_creator(
        &storage,
        request,
        duplicate_request.origin_schedule_id,
    )
    .await
    {
        Ok(uid) => uid,
        Err(resp) => return Ok(resp),
    };

    match storage
        .duplicate_activity(
            duplicate_request.origin_schedule_id,
            &duplicate_request.targets,
        )
        .await
    {
        Ok(created) => {
            info!(
                "Activity {} duplicated to {} target(s) by {}",
                duplicate_request.origin_schedule_id,
                duplicate_request.targets.len(),
                uid
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(created, "Actividad duplicada correctamente")))
        }
        Err(e) if matches!(e, crate::errors::AulaError::NotFound(_)) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ActivityNotFound,
                e.message().to_string(),
            )))
        }
        Err(e) => {
            error!("Failed to duplicate activity: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al duplicar la actividad",
                )),
            )
        }
    }
}
