//! 活动资源实体
//!
//! 一个资源承载活动的内容（标题、描述、类型）。被复制到多个班组的活动
//! 共享同一个资源，由多条日程记录引用。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub resource_type_id: i64,
    // 学生是否需要提交交付物
    pub requires_deliverable: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_types::Entity",
        from = "Column::ResourceTypeId",
        to = "super::resource_types::Column::Id"
    )]
    ResourceType,
    #[sea_orm(has_many = "super::resource_schedules::Entity")]
    ResourceSchedules,
    #[sea_orm(has_many = "super::file_resources::Entity")]
    FileResources,
}

impl Related<super::resource_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl Related<super::resource_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceSchedules.def()
    }
}

impl Related<super::file_resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileResources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
