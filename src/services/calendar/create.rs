use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CalendarService;
use crate::middlewares::RequireJWT;
use crate::models::calendar::requests::CreateActivityRequest;
use crate::models::users::entities::PersonRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::hypertext;

pub async fn create_activity(
    service: &CalendarService,
    request: &HttpRequest,
    mut activity: CreateActivityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };
    let role = RequireJWT::extract_person_role(request);

    // 标题必填
    if activity.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "El título es requerido",
        )));
    }

    // 教学分配必须存在，且属于发起的教师（管理员除外）
    let assignment = match storage.get_assignment_by_id(activity.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!(
                    "La asignación académica con ID {} no existe",
                    activity.assignment_id
                ),
            )));
        }
        Err(e) => {
            error!("Failed to load assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while validating assignment",
                )),
            );
        }
    };

    if role != Some(PersonRole::Admin) && assignment.teacher_id != uid {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ActivityPermissionDenied,
            "No puedes crear actividades para asignaciones de otro docente",
        )));
    }

    // 请求没带学年/学期时按今天解析；没有进行中的学期就拒绝创建
    if activity.year_id.unwrap_or(0) == 0 || activity.period_id.unwrap_or(0) == 0 {
        let today = chrono::Utc::now().date_naive();
        match storage
            .assignment_year_and_period(activity.assignment_id, today)
            .await
        {
            Ok((year_id, period_id)) if period_id > 0 => {
                activity.year_id = Some(year_id);
                activity.period_id = Some(period_id);
            }
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ActivityCreationFailed,
                    "No se pudo obtener el año y periodo de la asignación académica",
                )));
            }
            Err(e) => {
                error!("Failed to resolve year/period: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while resolving period",
                    )),
                );
            }
        }
    }

    // 组装富文本：显式富文本 > 视频链接 > 问题列表
    let text = hypertext::compose(
        activity.hypertext.as_deref(),
        activity.videos.as_deref(),
        activity.questions.as_deref(),
    );

    match storage.create_activity(&activity, text).await {
        Ok(created) => {
            info!(
                "Activity created: schedule {} (resource {}) for assignment {} by {}",
                created.schedule_id, created.resource_id, activity.assignment_id, uid
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(created, "Actividad creada exitosamente")))
        }
        Err(e) => {
            error!("Activity creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ActivityCreationFailed,
                    format!("Error al crear la actividad: {e}"),
                )),
            )
        }
    }
}
