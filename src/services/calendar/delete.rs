use std::path::Path;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::CalendarService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::PersonRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::file_path::{UNKNOWN_DANE_CODE, resolve_stored_path};

/// 校验调用者是活动的创建教师（管理员放行）。
/// 返回 Err 时为可直接返回的错误响应。
pub(crate) async fn check_schedule_creator(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    schedule_id: i64,
) -> Result<i64, HttpResponse> {
    let Some(uid) = RequireJWT::extract_person_id(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing person id",
        )));
    };

    match storage.schedule_creator(schedule_id).await {
        Ok(Some(creator_id)) => {
            let role = RequireJWT::extract_person_role(request);
            if creator_id != uid && role != Some(PersonRole::Admin) {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ActivityPermissionDenied,
                    "Solo el docente que creó la actividad puede modificarla",
                )));
            }
            Ok(uid)
        }
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            format!("No se encontró la actividad con ID {schedule_id}"),
        ))),
        Err(e) => {
            error!("Failed to resolve schedule creator: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking permissions",
                )),
            )
        }
    }
}

/// 解除文件与资源的关联；文件不再被任何资源引用时连磁盘一并删除。
pub(crate) async fn remove_file_if_unreferenced(
    storage: &Arc<dyn Storage>,
    file_id: i64,
    resource_id: i64,
    dane_code: &str,
) -> crate::errors::Result<()> {
    let file = storage.get_stored_file(file_id).await?;

    storage.unlink_file_from_resource(file_id, resource_id).await?;

    if storage.file_link_count(file_id).await? > 0 {
        // 复制出的其他活动还在用这个文件
        return Ok(());
    }

    if let Some(file) = file {
        let root = Path::new(&AppConfig::get().storage.root).to_path_buf();
        let full_path = resolve_stored_path(&root, &file.unique_name, dane_code);
        match std::fs::remove_file(&full_path) {
            Ok(_) => info!("Archivo eliminado de disco: {}", full_path.display()),
            Err(e) => warn!(
                "Archivo no encontrado en disco (se elimina solo el registro) {}: {}",
                full_path.display(),
                e
            ),
        }
    }

    storage.delete_stored_file_row(file_id).await?;
    Ok(())
}

pub async fn delete_activity(
    service: &CalendarService,
    request: &HttpRequest,
    schedule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 只有创建教师可以删除
    let uid = match check_schedule_creator(&storage, request, schedule_id).await {
        Ok(uid) => uid,
        Err(resp) => return Ok(resp),
    };

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
                    "Error al eliminar la actividad",
                )),
            );
        }
    };

    // 2. 附件：磁盘 + 关联 + 记录（仍被其他资源引用的只解除关联）。
    //    资源还被复制出的其他日程使用时，附件原样保留。
    let shared_resource = storage
        .resource_schedule_count(resource_id)
        .await
        .map(|count| count > 1)
        .unwrap_or(false);

    if !shared_resource {
        let dane_code = storage
            .dane_code_by_schedule(schedule_id)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_DANE_CODE.to_string());

        match storage.resource_files(resource_id).await {
            Ok(files) => {
                for (file, _renderable) in files {
                    if let Err(e) =
                        remove_file_if_unreferenced(&storage, file.id, resource_id, &dane_code)
                            .await
                    {
                        error!("Failed to remove file {}: {}", file.id, e);
                    }
                }
            }
            Err(e) => {
                error!("Failed to list resource files: {}", e);
            }
        }
    }

    // 3. 富文本、日程、资源
    match storage.delete_activity_rows(schedule_id).await {
        Ok(true) => {
            info!("Activity {} deleted by {}", schedule_id, uid);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Actividad eliminada exitosamente")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            format!("No se encontró la actividad con ID {schedule_id}"),
        ))),
        Err(e) => {
            error!("Failed to delete activity {}: {}", schedule_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Error al eliminar la actividad",
                )),
            )
        }
    }
}
