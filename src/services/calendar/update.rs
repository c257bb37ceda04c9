use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CalendarService;
use super::delete::{check_schedule_creator, remove_file_if_unreferenced};
use crate::models::calendar::requests::UpdateActivityRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_path::UNKNOWN_DANE_CODE;
use crate::utils::hypertext;

pub async fn update_activity(
    service: &CalendarService,
    request: &HttpRequest,
    schedule_id: i64,
    update: UpdateActivityRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 只有创建教师可以编辑
    let uid = match check_schedule_creator(&storage, request, schedule_id).await {
        Ok(uid) => uid,
        Err(resp) => return Ok(resp),
    };

    if update.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "El título es requerido",
        )));
    }

    // 2. 编辑时移除的附件：磁盘与记录一并删除（共享附件只解除关联）
    if let Some(ref removed) = update.removed_file_ids
        && !removed.is_empty()
    {
        let resource_id = match storage.schedule_resource_id(schedule_id).await {
            Ok(Some(resource_id)) => resource_id,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ActivityNotFound,
                    format!("No se encontró la actividad con ID {schedule_id}"),
                )));
            }
            Err(e) => {
                error!("Failed to resolve schedule resource: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Error al actualizar la actividad",
                    )),
                );
            }
        };

        let dane_code = storage
            .dane_code_by_schedule(schedule_id)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_DANE_CODE.to_string());

        for file_id in removed {
            if let Err(e) =
                remove_file_if_unreferenced(&storage, *file_id, resource_id, &dane_code).await
            {
                error!("Failed to remove file {}: {}", file_id, e);
            }
        }
    }

    // 3. 组装富文本并更新
    let text = hypertext::compose(
        update.hypertext.as_deref(),
        update.videos.as_deref(),
        update.questions.as_deref(),
    );

    match storage.update_activity(schedule_id, &update, text).await {
        Ok(true) => {
            info!("Activity {} updated by {}", schedule_id, uid);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Actividad actualizada exitosamente")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            format!("No se encontró la actividad con ID {schedule_id}"),
        ))),
        Err(e) => {
            error!("Failed to update activity {}: {}", schedule_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al actualizar la actividad",
                )),
            )
        }
    }
}
