use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 按邮箱、证件号或手机号找人
    let person = match storage
        .find_person_by_identifier(&login_request.identifier)
        .await
    {
        Ok(person) => person,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码：有自定义密码走 bcrypt，没有走证件号回退。
    //    用户不存在与密码错误对外不可区分。
    let verified = person.as_ref().is_some_and(|p| {
        verify_password(
            &login_request.password,
            p.password_hash.as_deref(),
            &p.document_number,
        )
    });

    let Some(person) = person.filter(|_| verified) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Usuario o contraseña incorrectos",
        )));
    };

    // 3. 更新最后登录时间
    let _ = storage.update_last_login(person.id).await;

    // 4. 生成令牌对
    match person
        .generate_token_pair(
            login_request
                .remember_me
                .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)),
        )
        .await
    {
        Ok(token_pair) => {
            tracing::info!("Person {} logged in successfully", person.id);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                person,
                created_at: chrono::Utc::now(),
            };

            // 5. 创建 refresh token cookie
            let refresh_cookie = jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
