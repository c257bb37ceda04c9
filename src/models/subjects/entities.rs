use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学科卡片的柔和配色，值对应前端 app.css 中定义的变量
const PASTEL_COLOR_VARIABLES: [&str; 10] = [
    "--color-pastel-sky-blue",
    "--color-pastel-blue-green",
    "--color-pastel-ocean",
    "--color-pastel-teal",
    "--color-pastel-verde",
    "--color-pastel-salmon",
    "--color-pastel-tulip",
    "--color-pastel-amber",
    "--color-pastel-mauve",
    "--color-pastel-peach",
];

/// 按学科 ID 取稳定的柔和色（同一学科每次看到的颜色一致）
pub fn pastel_color_for_subject(subject_id: i64) -> String {
    let index = subject_id.unsigned_abs() as usize % PASTEL_COLOR_VARIABLES.len();
    format!("var({})", PASTEL_COLOR_VARIABLES[index])
}

// 某个教学分配的活动统计
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct ActivityStats {
    pub total: i64,
    // 可见且排期在今天或以后
    pub active: i64,
    // 已被教师隐藏
    pub inactive: i64,
    // 可见但排期已过
    pub pending: i64,
}

// 教师所授学科的卡片（一个教学分配一张卡）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct TaughtSubject {
    pub subject_id: i64,
    pub assignment_id: i64,
    pub subject_name: String,
    pub teacher_id: i64,
    pub group_id: i64,
    pub group_name: String,
    // 学校名称，缺失时回退为校区名称
    pub institution_name: String,
    pub color: String,
    pub student_count: i64,
    pub stats: Option<ActivityStats>,
}

// 教学分配（教师 × 班组 × 学科）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Assignment {
    pub id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
    pub subject_id: i64,
}

// 当前学期
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CurrentPeriod {
    pub period_id: i64,
    pub period: String,
    pub year_id: i64,
    pub year: String,
}

impl CurrentPeriod {
    /// 找不到任何学期时的兜底值：第 1 学期、当前自然年
    pub fn fallback(today: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            period_id: 0,
            period: "1".to_string(),
            year_id: 0,
            year: today.year().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pastel_color_is_stable() {
        assert_eq!(pastel_color_for_subject(42), pastel_color_for_subject(42));
    }

    #[test]
    fn test_pastel_color_wraps_palette() {
        assert_eq!(
            pastel_color_for_subject(3),
            pastel_color_for_subject(3 + PASTEL_COLOR_VARIABLES.len() as i64)
        );
        assert_eq!(pastel_color_for_subject(0), "var(--color-pastel-sky-blue)");
    }

    #[test]
    fn test_fallback_period() {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let p = CurrentPeriod::fallback(today);
        assert_eq!(p.period, "1");
        assert_eq!(p.year, "2025");
        assert_eq!(p.period_id, 0);
    }
}
