/*!
 * 速率限制中间件
 *
 * 按客户端 IP 在固定时间窗内计数，超限返回 429。登录与找回密码
 * 路由使用，防止撞库。
 *
 * ```rust,ignore
 * web::scope("/api/v1/auth")
 *     .wrap(RateLimit::new("auth", 5))  // 5次/分钟
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 前缀:IP，值: 窗口内的请求计数；窗口一分钟
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    // 限制键前缀（用于区分不同端点）
    scope: &'static str,
    // 时间窗口内允许的最大请求数
    max_requests: u32,
}

impl RateLimit {
    pub fn new(scope: &'static str, max_requests: u32) -> Self {
        Self {
            scope,
            max_requests,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            scope: self.scope,
            max_requests: self.max_requests,
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    scope: &'static str,
    max_requests: u32,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let scope = self.scope;
        let max_requests = self.max_requests;

        Box::pin(async move {
            let client_ip = req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string();
            let key = format!("{scope}:{client_ip}");

            let count = RATE_LIMIT_CACHE.get(&key).await.unwrap_or(0);
            if count >= max_requests {
                warn!("Rate limit exceeded for {} on {}", client_ip, req.path());
                return Ok(req.into_response(
                    HttpResponse::TooManyRequests()
                        .json(ApiResponse::error_empty(
                            ErrorCode::RateLimited,
                            "Too many requests, please try again later",
                        ))
                        .map_into_right_body(),
                ));
            }
            RATE_LIMIT_CACHE.insert(key, count + 1).await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
