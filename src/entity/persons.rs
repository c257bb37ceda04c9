//! 人员实体（学生、教师、管理员）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub document_number: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub other_names: Option<String>,
    pub photo_url: Option<String>,
    pub role: String,
    pub status: String,
    // NULL 表示还没有自定义密码，走证件号回退校验
    pub password_hash: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::academic_assignments::Entity")]
    AcademicAssignments,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::forum_posts::Entity")]
    ForumPosts,
}

impl Related<super::academic_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicAssignments.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::forum_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumPosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_person(self) -> crate::models::users::entities::Person {
        use crate::models::users::entities::{Person, PersonRole, PersonStatus};
        use chrono::{DateTime, Utc};

        let full_name = Person::compose_full_name(
            &self.last_name,
            self.second_last_name.as_deref(),
            &self.first_name,
            self.other_names.as_deref(),
        );

        Person {
            id: self.id,
            document_number: self.document_number,
            email: self.email,
            phone: self.phone,
            full_name,
            photo_url: self.photo_url,
            role: self.role.parse::<PersonRole>().unwrap_or(PersonRole::Student),
            status: self
                .status
                .parse::<PersonStatus>()
                .unwrap_or(PersonStatus::Active),
            password_hash: self.password_hash,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
