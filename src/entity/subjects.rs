//! 学科实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::academic_assignments::Entity")]
    AcademicAssignments,
}

impl Related<super::academic_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
