//! 帮助链接实体
//!
//! 每个界面组件对应一对帮助资源：VIDEO 的 application_code 为组件代码，
//! PDF 的为组件代码 + 1。kind 列为空的历史数据按代码规则区分。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "help_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub application_code: i32,
    pub name: String,
    pub url: String,
    pub kind: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
