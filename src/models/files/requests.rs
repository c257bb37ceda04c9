use serde::Deserialize;
use ts_rs::TS;

// 上传附件的查询参数：附件按教学分配所属学校归档
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct UploadQuery {
    pub assignment_id: i64,
}
