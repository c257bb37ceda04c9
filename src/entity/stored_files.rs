//! 文件实体
//!
//! unique_name 对新记录保存磁盘上的绝对路径；历史记录可能只有文件名或
//! 相对路径，下载时按 DANE 代码目录重建（见 utils::file_path）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stored_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub original_name: String,
    pub unique_name: String,
    pub file_type_id: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::file_resources::Entity")]
    FileResources,
}

impl Related<super::file_resources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileResources.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
