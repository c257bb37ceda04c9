use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班组学生数
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct StudentCountResponse {
    pub count: i64,
}

// 学校名称
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct InstitutionNameResponse {
    pub name: String,
}

// 教师所属学校
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct TeacherSchoolResponse {
    pub school_id: i64,
}

// 班组的第一个教学分配（创建班组级活动时使用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct FirstAssignmentResponse {
    pub assignment_id: i64,
}
