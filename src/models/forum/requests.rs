use serde::Deserialize;
use ts_rs::TS;

// 发帖请求（作者取自 JWT）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forum.ts")]
pub struct CreateForumPostRequest {
    pub assignment_id: i64,
    pub content: String,
}

// 编辑帖子请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forum.ts")]
pub struct UpdateForumPostRequest {
    pub content: String,
}
