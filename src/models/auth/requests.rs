use serde::Deserialize;
use ts_rs::TS;

// 登录请求：identifier 可以是邮箱、证件号或手机号
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 找回密码信息校验请求：三项必须指向同一个人
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ValidateRecoveryRequest {
    pub email: String,
    pub phone: String,
    pub document_number: String,
}

// 修改密码请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ChangePasswordRequest {
    pub email: String,
    pub phone: String,
    pub document_number: String,
    pub new_password: String,
    pub confirm_password: String,
}
