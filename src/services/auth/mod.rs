pub mod login;
pub mod logout;
pub mod profile;
pub mod recovery;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::{ChangePasswordRequest, LoginRequest, ValidateRecoveryRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    // 登录
    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 注销：清掉 refresh cookie 和缓存的用户信息
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, request).await
    }

    // 用 refresh token 换新的 access token
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh(self, request).await
    }

    // 当前登录人的档案
    pub async fn profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_profile(self, request).await
    }

    // 找回密码信息校验
    pub async fn validate_recovery(
        &self,
        request: &HttpRequest,
        recovery: ValidateRecoveryRequest,
    ) -> ActixResult<HttpResponse> {
        recovery::handle_validate_recovery(self, request, recovery).await
    }

    // 修改密码
    pub async fn change_password(
        &self,
        request: &HttpRequest,
        change: ChangePasswordRequest,
    ) -> ActixResult<HttpResponse> {
        recovery::handle_change_password(self, request, change).await
    }
}
