use serde::Deserialize;
use ts_rs::TS;

use super::entities::PersonRole;

// 人员列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct PersonListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    // 按姓名或证件号搜索
    pub search: Option<String>,
    pub role: Option<PersonRole>,
}

// 创建人员请求（启动时播种管理员也走这里）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct CreatePersonRequest {
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub other_names: Option<String>,
    pub role: PersonRole,
    // 已经哈希过的密码；None 表示使用证件号回退
    #[ts(skip)]
    #[serde(skip)]
    pub password_hash: Option<String>,
}
