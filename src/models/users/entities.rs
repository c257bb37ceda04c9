use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 人员角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub enum PersonRole {
    Student, // 学生
    Teacher, // 教师
    Admin,   // 管理员
}

impl PersonRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static PersonRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static PersonRole] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static PersonRole] {
        &[&Self::Student, &Self::Teacher, &Self::Admin]
    }
}

impl<'de> Deserialize<'de> for PersonRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PersonRole>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonRole::Student => write!(f, "{}", PersonRole::STUDENT),
            PersonRole::Teacher => write!(f, "{}", PersonRole::TEACHER),
            PersonRole::Admin => write!(f, "{}", PersonRole::ADMIN),
        }
    }
}

impl std::str::FromStr for PersonRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(PersonRole::Student),
            "teacher" => Ok(PersonRole::Teacher),
            "admin" => Ok(PersonRole::Admin),
            _ => Err(format!(
                "Invalid person role: '{s}'. Supported roles: student, teacher, admin"
            )),
        }
    }
}

// 人员状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub enum PersonStatus {
    Active,   // 活跃
    Inactive, // 停用
}

impl<'de> Deserialize<'de> for PersonStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PersonStatus>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonStatus::Active => write!(f, "active"),
            PersonStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for PersonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PersonStatus::Active),
            "inactive" => Ok(PersonStatus::Inactive),
            _ => Err(format!("Invalid person status: {s}")),
        }
    }
}

// 人员实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/person.ts")]
pub struct Person {
    pub id: i64,
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub full_name: String,
    pub photo_url: Option<String>,
    pub role: PersonRole,
    pub status: PersonStatus,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Person {
    /// 姓名展示顺序与历史平台一致：姓 + 第二姓 + 名 + 其他名
    pub fn compose_full_name(
        last_name: &str,
        second_last_name: Option<&str>,
        first_name: &str,
        other_names: Option<&str>,
    ) -> String {
        [
            Some(last_name),
            second_last_name,
            Some(first_name),
            other_names,
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    // 生成 token 对（access + refresh）
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_full_name_all_parts() {
        assert_eq!(
            Person::compose_full_name("García", Some("Pérez"), "Ana", Some("María")),
            "García Pérez Ana María"
        );
    }

    #[test]
    fn test_compose_full_name_skips_empty() {
        assert_eq!(
            Person::compose_full_name("Rojas", Some("  "), "Luis", None),
            "Rojas Luis"
        );
    }

    #[test]
    fn test_role_parse_roundtrip() {
        for role in PersonRole::all_roles() {
            let parsed = role.to_string().parse::<PersonRole>().unwrap();
            assert_eq!(&&parsed, role);
        }
        assert!("profesor".parse::<PersonRole>().is_err());
    }
}
