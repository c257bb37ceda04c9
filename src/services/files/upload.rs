use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::AulaError;
use crate::models::files::requests::UploadQuery;
use crate::models::files::responses::FileUploadResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_path::{UNKNOWN_DANE_CODE, build_upload_path};
use crate::utils::validate_magic_bytes;

pub async fn handle_upload(
    service: &FileService,
    request: &HttpRequest,
    query: UploadQuery,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();
    let max_size = config.storage.max_size;
    let allowed_types = &config.storage.allowed_types;

    // 附件按教学分配所属学校的 DANE 代码归档
    let dane_code = storage
        .dane_code_by_assignment(query.assignment_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_DANE_CODE.to_string());

    let root = Path::new(&config.storage.root);
    let target_dir = root.join(&dane_code);
    if !target_dir.exists()
        && let Err(e) = fs::create_dir_all(&target_dir)
    {
        tracing::error!("{}", AulaError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建附件目录失败",
            )),
        );
    }

    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut stored_path = std::path::PathBuf::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 提取扩展名并校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            stored_path = build_upload_path(root, &dane_code, &original_name);
            let mut f = match File::create(&stored_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", AulaError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&stored_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                if total_size > max_size {
                    let _ = fs::remove_file(&stored_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileUploadFailed,
                        "File exceeds the maximum allowed size",
                    )));
                }

                if let Err(e) = f.write_all(&data) {
                    tracing::error!("{}", AulaError::file_operation(format!("{e}")));
                    let _ = fs::remove_file(&stored_path);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件写入失败"),
                    ));
                }
            }

            file_size = total_size as i64;
        }
    }

    if !file_uploaded || original_name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileUploadFailed,
            "Missing file field",
        )));
    }

    // unique_name 保存完整磁盘路径，其他服务可以直接定位文件
    let unique_name = stored_path.to_string_lossy().replace('\\', "/");

    match storage
        .insert_stored_file(&original_name, &unique_name, 0)
        .await
    {
        Ok(stored) => {
            tracing::info!(
                "File {} stored as {} ({} bytes)",
                original_name,
                unique_name,
                file_size
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FileUploadResponse {
                    file_id: stored.id,
                    original_name: stored.original_name,
                    size: file_size,
                },
                "File uploaded",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to register file: {}", e);
            let _ = fs::remove_file(&stored_path);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    "Error al registrar el archivo",
                )),
            )
        }
    }
}
