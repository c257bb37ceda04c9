use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 上传成功的返回，file_id 用于创建/更新活动时关联
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    pub file_id: i64,
    pub original_name: String,
    pub size: i64,
}
