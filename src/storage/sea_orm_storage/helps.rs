//! 帮助链接存储操作

use super::SeaOrmStorage;
use crate::entity::help_links::{Column, Entity as HelpLinks};
use crate::errors::{AulaError, Result};
use crate::models::helps::entities::{HelpKind, HelpLink};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 按代码取帮助链接（VIDEO 在组件代码上，PDF 在代码 + 1 上）
    pub async fn help_links_by_codes_impl(
        &self,
        video_code: i32,
        pdf_code: i32,
    ) -> Result<Vec<(HelpLink, Option<HelpKind>)>> {
        let rows = HelpLinks::find()
            .filter(
                Condition::any()
                    .add(Column::ApplicationCode.eq(video_code))
                    .add(Column::ApplicationCode.eq(pdf_code)),
            )
            .order_by_asc(Column::ApplicationCode)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询帮助链接失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let kind = row.kind.as_deref().and_then(HelpKind::parse);
                (
                    HelpLink {
                        id: row.id,
                        application_code: row.application_code,
                        name: row.name,
                        url: row.url,
                    },
                    kind,
                )
            })
            .collect())
    }
}
