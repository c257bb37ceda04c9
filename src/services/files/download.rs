use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::AulaError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::content_type_for;
use crate::utils::file_path::{UNKNOWN_DANE_CODE, resolve_stored_path};

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    file_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let db_file = match storage.get_stored_file(file_id).await {
        Ok(Some(f)) => f,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "Archivo no encontrado",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("File query failed: {e}"),
                )),
            );
        }
    };

    // 历史记录可能只存了文件名，需要 DANE 代码目录来重建路径。
    // 没有任何日程引用该文件时按 SIN_DANE 兜底。
    let dane_code = storage
        .dane_code_by_file(file_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_DANE_CODE.to_string());

    let config = AppConfig::get();
    let root = Path::new(&config.storage.root);
    let full_path = resolve_stored_path(root, &db_file.unique_name, &dane_code);

    if !full_path.exists() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "Archivo no encontrado",
        )));
    }

    let mut file = match File::open(&full_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", AulaError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", AulaError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    // Content-Type 按原始文件名推断，下载名用原始文件名
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&db_file.original_name)))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", db_file.original_name),
        ))
        .body(buf))
}
