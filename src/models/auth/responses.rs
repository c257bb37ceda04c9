use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::Person;

// 登录响应；refresh token 通过 http-only cookie 下发
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    // access token 有效期（秒）
    pub expires_in: i64,
    pub person: Person,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 刷新 access token 的返回
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// 找回密码信息校验结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RecoveryValidationResponse {
    pub valid: bool,
}
