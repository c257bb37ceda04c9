use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/复制活动的返回
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CreatedActivityResponse {
    pub schedule_id: i64,
    pub resource_id: i64,
}

// 可复制的活动（复制界面的列表项）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicableActivity {
    pub schedule_id: i64,
    pub title: String,
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub assignment_id: i64,
    pub grade_level_id: i64,
    pub group_name: String,
    pub subject_name: String,
}

// 可作为复制目标的班组（同一教师同一学科的其他分配）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicateTargetGroup {
    pub assignment_id: i64,
    pub group_id: i64,
    pub group_name: String,
}
