use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::PersonRole;

// 论坛帖子（带作者信息）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forum.ts")]
pub struct ForumPost {
    pub id: i64,
    pub assignment_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub author_role: PersonRole,
    pub content: String,
    pub deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 帖子的一次历史版本
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forum.ts")]
pub struct ForumRevision {
    pub id: i64,
    pub post_id: i64,
    pub previous_content: String,
    pub edited_at: chrono::DateTime<chrono::Utc>,
}
