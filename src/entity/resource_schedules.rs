//! 活动日程实体
//!
//! 资源在某个教学分配日历上的一次投放。visible = false 的日程对学生隐藏，
//! 但教师端仍会看到（标记为已停用）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub resource_id: i64,
    // 日历上的发布时刻（unix 时间戳，UTC）
    pub scheduled_at: i64,
    pub visible: bool,
    pub onsite: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academic_assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::academic_assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::resources::Entity",
        from = "Column::ResourceId",
        to = "super::resources::Column::Id"
    )]
    Resource,
}

impl Related<super::academic_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
