use serde::Deserialize;
use ts_rs::TS;

// 按日查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DateQuery {
    pub date: chrono::NaiveDate,
}

// 按月查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

// 移动活动的目标时刻
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct MoveActivityQuery {
    pub date: chrono::DateTime<chrono::Utc>,
}

// 发布视频的请求片段
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct EngagementVideoRequest {
    pub url: String,
    #[serde(default)]
    pub position: i32,
}

// 问题的请求片段
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct PromptQuestionRequest {
    pub statement: String,
    #[serde(default)]
    pub position: i32,
}

// 创建活动请求
//
// 附件先通过文件上传接口入库，这里只携带返回的文件 ID。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CreateActivityRequest {
    pub assignment_id: i64,
    pub activity_type_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub requires_deliverable: bool,
    pub year_id: Option<i64>,
    pub period_id: Option<i64>,
    pub hypertext: Option<String>,
    pub videos: Option<Vec<EngagementVideoRequest>>,
    pub questions: Option<Vec<PromptQuestionRequest>>,
    pub file_ids: Option<Vec<i64>>,
}

// 更新活动请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct UpdateActivityRequest {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub requires_deliverable: bool,
    pub hypertext: Option<String>,
    pub videos: Option<Vec<EngagementVideoRequest>>,
    pub questions: Option<Vec<PromptQuestionRequest>>,
    // 本次新增的附件
    pub file_ids: Option<Vec<i64>>,
    // 编辑时移除的附件，磁盘与记录一并删除
    pub removed_file_ids: Option<Vec<i64>>,
}

// 复制活动的一个目标：教学分配 + 日期 + 时刻
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicateTarget {
    pub assignment_id: i64,
    pub date: chrono::NaiveDate,
    // "HH:MM"，解析失败按 00:00 处理
    #[serde(default)]
    pub time: String,
}

impl DuplicateTarget {
    /// 解析 "HH:MM"；格式不合法时按午夜处理
    pub fn time_of_day(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .unwrap_or(chrono::NaiveTime::MIN)
    }

    /// 目标日程的完整时刻（UTC）
    pub fn scheduled_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.date.and_time(self.time_of_day()).and_utc()
    }
}

// 复制活动请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicateActivityRequest {
    // 来源日程 ID
    pub origin_schedule_id: i64,
    pub targets: Vec<DuplicateTarget>,
}

// 可复制活动列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicableQuery {
    pub subject_id: i64,
}

// 复制目标班组查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct DuplicateTargetsQuery {
    pub assignment_id: i64,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(time: &str) -> DuplicateTarget {
        DuplicateTarget {
            assignment_id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_time_of_day_parses_hh_mm() {
        assert_eq!(
            target("14:30").time_of_day(),
            chrono::NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_malformed_time_falls_back_to_midnight() {
        assert_eq!(target("").time_of_day(), chrono::NaiveTime::MIN);
        assert_eq!(target("2pm").time_of_day(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn test_scheduled_at_combines_date_and_time() {
        let at = target("07:15").scheduled_at();
        assert_eq!(at.to_rfc3339(), "2025-03-10T07:15:00+00:00");
    }
}
