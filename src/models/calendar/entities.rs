use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 日历上的一条活动（教学分配视角或班组视角）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct CalendarActivity {
    // 日程 ID（不是资源 ID）
    pub id: i64,
    pub activity_type_id: i64,
    pub activity_type: String,
    pub title: Option<String>,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub assignment_id: i64,
    pub year_id: i64,
    pub period_id: i64,
    // visible = false 的日程在教师端标记为已停用
    pub deleted: bool,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub subject_name: Option<String>,
}

// 活动类型（带前端图标）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct ActivityType {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

impl ActivityType {
    /// 活动类型到 Bootstrap Icons 的映射，未知类型用日历图标
    pub fn icon_for(name: &str) -> &'static str {
        match name {
            "Video de Enganche" => "bi-play-circle",
            "Preguntas problematizadoras" => "bi-question-circle",
            "Lección Interactiva" => "bi-book",
            "Tarea" => "bi-file-text",
            "Trabajo" => "bi-briefcase",
            "Taller" => "bi-tools",
            "Investigación" => "bi-search",
            "Proyecto" => "bi-folder",
            "Actividad Práctica" => "bi-clipboard-check",
            "Juego Educativo" => "bi-controller",
            "Presentación (Sliders)" => "bi-presentation",
            "Documento (Archivo)" => "bi-file-earmark",
            "Recurso de Lectura" => "bi-journal-text",
            "Clase Virtual" => "bi-camera-video",
            "Encuentro" => "bi-people",
            "Resumen clase" => "bi-file-earmark-text",
            "Evaluación" => "bi-clipboard-check",
            _ => "bi-calendar-event",
        }
    }
}

// 视频活动的一条链接
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct EngagementVideo {
    pub url: String,
    pub position: i32,
}

// 问题型活动的一条问题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct PromptQuestion {
    pub statement: String,
    pub position: i32,
}

// 活动附件（详情展示用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct ActivityFile {
    pub id: i64,
    // 展示给用户的名称
    pub display_name: String,
    pub file_type_id: i32,
    pub renderable: bool,
}

// 活动完整详情（编辑界面使用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/calendar.ts")]
pub struct ActivityDetail {
    // 日程 ID
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub active: bool,
    pub requires_deliverable: bool,
    pub hypertext: Option<String>,
    pub videos: Vec<EngagementVideo>,
    pub questions: Vec<PromptQuestion>,
    pub files: Vec<ActivityFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_for_known_types() {
        assert_eq!(ActivityType::icon_for("Tarea"), "bi-file-text");
        assert_eq!(
            ActivityType::icon_for("Video de Enganche"),
            "bi-play-circle"
        );
    }

    #[test]
    fn test_icon_for_unknown_type() {
        assert_eq!(ActivityType::icon_for("Sin tipo"), "bi-calendar-event");
    }
}
