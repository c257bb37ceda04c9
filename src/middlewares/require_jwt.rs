/*!
 * JWT 认证中间件
 *
 * 验证 Authorization 头中的 access token，把认证通过的人员信息放进
 * 请求扩展，供处理函数与 RequireRole 使用。
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 校验签名与过期时间
 * 3. 按 token 从缓存取人员信息；未命中时回源数据库并写缓存
 * 4. 人员必须处于 active 状态，否则按未授权处理
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::users::entities::{Person, PersonRole, PersonStatus};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Person, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取人员信息
    if let CacheResult::Found(json) = cache.get_raw(&format!("person:{token}")).await {
        match serde_json::from_str::<Person>(&json) {
            Ok(person) => return Ok(person),
            Err(_) => {
                cache.remove(&format!("person:{token}")).await;
                info!("Failed to deserialize person from cache for token");
            }
        }
    }

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let person_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid person ID in JWT".to_string())?;

    let person = storage
        .get_person_by_id(person_id)
        .await
        .map_err(|_| "Failed to retrieve person from storage".to_string())?
        .ok_or_else(|| "Person not found".to_string())?;

    if person.status != PersonStatus::Active {
        return Err("Person is not active".to_string());
    }

    // 将人员信息存入缓存
    let app_config = AppConfig::get();
    if let Ok(person_json) = serde_json::to_string(&person) {
        cache
            .insert_raw(
                format!("person:{token}"),
                person_json,
                app_config.cache.default_ttl,
            )
            .await;
    }

    Ok(person)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(person) => {
                    debug!("JWT authentication successful for ID: {}", person.id);
                    req.extensions_mut().insert(person);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取人员信息
impl RequireJWT {
    /// 从请求扩展中提取完整的人员信息
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_person(req: &actix_web::HttpRequest) -> Option<Person> {
        req.extensions().get::<Person>().cloned()
    }

    /// 从请求扩展中提取人员ID
    pub fn extract_person_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Person>().map(|person| person.id)
    }

    /// 从请求扩展中提取人员角色
    pub fn extract_person_role(req: &actix_web::HttpRequest) -> Option<PersonRole> {
        req.extensions()
            .get::<Person>()
            .map(|person| person.role.clone())
    }
}
