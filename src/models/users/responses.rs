use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Person;
use crate::models::PaginationInfo;

// 人员列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct PersonListResponse {
    pub items: Vec<Person>,
    pub pagination: PaginationInfo,
}
