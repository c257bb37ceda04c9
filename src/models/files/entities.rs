use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 已入库的文件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct StoredFile {
    pub id: i64,
    pub original_name: String,
    // 新记录为磁盘绝对路径；历史记录可能是裸文件名或相对路径
    #[ts(skip)]
    #[serde(skip_serializing, default)]
    pub unique_name: String,
    pub file_type_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
