/*!
 * 角色授权中间件
 *
 * 在 RequireJWT 之后使用：人员信息已在请求扩展中，这里只做角色比对。
 *
 * ```rust,ignore
 * web::resource("/teacher")
 *     .route(web::get()
 *         .to(handler)
 *         .wrap(RequireRole::new_any(PersonRole::teacher_roles())))
 * ```
 */

use crate::models::users::entities::{Person, PersonRole};
use crate::models::{ApiResponse, ErrorCode};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

#[derive(Clone)]
pub struct RequireRole {
    allowed: Vec<PersonRole>,
}

impl RequireRole {
    pub fn new(role: &PersonRole) -> Self {
        Self {
            allowed: vec![role.clone()],
        }
    }

    pub fn new_any(roles: &[&PersonRole]) -> Self {
        Self {
            allowed: roles.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: self.allowed.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: Vec<PersonRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let allowed = self.allowed.clone();
        Box::pin(async move {
            let role = req.extensions().get::<Person>().map(|p| p.role.clone());

            match role {
                Some(role) if allowed.contains(&role) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(role) => {
                    info!(
                        "Role check failed for {}: {} not in allowed set",
                        req.path(),
                        role
                    );
                    Ok(req.into_response(
                        HttpResponse::Forbidden()
                            .json(ApiResponse::error_empty(
                                ErrorCode::Forbidden,
                                "You do not have permission to access this resource",
                            ))
                            .map_into_right_body(),
                    ))
                }
                None => Ok(req.into_response(
                    HttpResponse::Unauthorized()
                        .json(ApiResponse::error_empty(
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        ))
                        .map_into_right_body(),
                )),
            }
        })
    }
}
