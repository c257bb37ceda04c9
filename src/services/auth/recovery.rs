//! 找回密码流程
//!
//! 两步：先校验邮箱 + 手机号 + 证件号三项指向同一个人，再设置新密码。
//! 设置成功后该人员的证件号回退登录即失效。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{ChangePasswordRequest, RecoveryValidationResponse, ValidateRecoveryRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_new_password_simple, validate_phone};

use super::AuthService;

pub async fn handle_validate_recovery(
    service: &AuthService,
    request: &HttpRequest,
    recovery: ValidateRecoveryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 格式不合法就不用查库了
    if validate_email(recovery.email.trim()).is_err()
        || validate_phone(recovery.phone.trim()).is_err()
    {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            RecoveryValidationResponse { valid: false },
            "La información proporcionada no coincide con ningún usuario",
        )));
    }

    match storage
        .find_person_by_recovery_info(
            recovery.email.trim(),
            recovery.phone.trim(),
            recovery.document_number.trim(),
        )
        .await
    {
        Ok(person) => {
            let valid = person.is_some();
            let message = if valid {
                "Información validada correctamente"
            } else {
                "La información proporcionada no coincide con ningún usuario"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RecoveryValidationResponse { valid },
                message,
            )))
        }
        Err(e) => {
            error!("Recovery validation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while validating recovery info",
                )),
            )
        }
    }
}

pub async fn handle_change_password(
    service: &AuthService,
    request: &HttpRequest,
    change: ChangePasswordRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 两次输入必须一致
    if change.new_password != change.confirm_password {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Las contraseñas no coinciden",
        )));
    }

    // 密码策略
    if let Err(message) =
        validate_new_password_simple(&change.new_password, change.document_number.trim())
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            message,
        )));
    }

    // 找回信息必须完整匹配
    let person = match storage
        .find_person_by_recovery_info(
            change.email.trim(),
            change.phone.trim(),
            change.document_number.trim(),
        )
        .await
    {
        Ok(Some(person)) => person,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RecoveryInfoMismatch,
                "La información proporcionada no coincide con ningún usuario",
            )));
        }
        Err(e) => {
            error!("Recovery lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while changing password",
                )),
            );
        }
    };

    let password_hash = match hash_password(&change.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while changing password",
                )),
            );
        }
    };

    match storage.set_person_password(person.id, &password_hash).await {
        Ok(true) => {
            info!("Password changed for person {}", person.id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Contraseña cambiada exitosamente")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PersonNotFound,
            "Person not found",
        ))),
        Err(e) => {
            error!("Password update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while changing password",
                )),
            )
        }
    }
}
