//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::file_resources::{
    ActiveModel as FileResourceActiveModel, Column as FileResourceColumn, Entity as FileResources,
};
use crate::entity::stored_files::{ActiveModel, Entity as StoredFiles};
use crate::errors::{AulaError, Result};
use crate::models::files::entities::StoredFile;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

fn into_stored_file(model: crate::entity::stored_files::Model) -> StoredFile {
    StoredFile {
        id: model.id,
        original_name: model.original_name,
        unique_name: model.unique_name,
        file_type_id: model.file_type_id,
        created_at: DateTime::<Utc>::from_timestamp(model.created_at, 0).unwrap_or_default(),
    }
}

impl SeaOrmStorage {
    /// 登记上传的附件
    pub async fn insert_stored_file_impl(
        &self,
        original_name: &str,
        unique_name: &str,
        file_type_id: i32,
    ) -> Result<StoredFile> {
        let model = ActiveModel {
            original_name: Set(original_name.to_string()),
            unique_name: Set(unique_name.to_string()),
            file_type_id: Set(file_type_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("登记文件失败: {e}")))?;

        Ok(into_stored_file(result))
    }

    /// 通过 ID 获取文件
    pub async fn get_stored_file_impl(&self, file_id: i64) -> Result<Option<StoredFile>> {
        let result = StoredFiles::find_by_id(file_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(into_stored_file))
    }

    /// 把文件关联到资源
    pub async fn link_file_to_resource_impl(
        &self,
        file_id: i64,
        resource_id: i64,
        renderable: bool,
    ) -> Result<()> {
        FileResourceActiveModel {
            file_id: Set(file_id),
            resource_id: Set(resource_id),
            renderable: Set(renderable),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("创建文件关联失败: {e}")))?;

        Ok(())
    }

    /// 资源的附件及 renderable 标记（按文件 ID 排序）
    pub async fn resource_files_impl(&self, resource_id: i64) -> Result<Vec<(StoredFile, bool)>> {
        let links = FileResources::find()
            .filter(FileResourceColumn::ResourceId.eq(resource_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询文件关联失败: {e}")))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let file_ids: Vec<i64> = links.iter().map(|l| l.file_id).collect();
        let files = StoredFiles::find()
            .filter(crate::entity::stored_files::Column::Id.is_in(file_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询文件失败: {e}")))?;

        let renderable_by_file: std::collections::HashMap<i64, bool> =
            links.into_iter().map(|l| (l.file_id, l.renderable)).collect();

        let mut result: Vec<(StoredFile, bool)> = files
            .into_iter()
            .map(|f| {
                let renderable = renderable_by_file.get(&f.id).copied().unwrap_or(false);
                (into_stored_file(f), renderable)
            })
            .collect();

        result.sort_by_key(|(file, _)| file.id);

        Ok(result)
    }

    /// 解除文件与资源的关联
    pub async fn unlink_file_from_resource_impl(
        &self,
        file_id: i64,
        resource_id: i64,
    ) -> Result<()> {
        FileResources::delete_many()
            .filter(FileResourceColumn::FileId.eq(file_id))
            .filter(FileResourceColumn::ResourceId.eq(resource_id))
            .exec(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("删除文件关联失败: {e}")))?;

        Ok(())
    }

    /// 文件当前被多少资源引用
    pub async fn file_link_count_impl(&self, file_id: i64) -> Result<u64> {
        FileResources::find()
            .filter(FileResourceColumn::FileId.eq(file_id))
            .count(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("统计文件引用失败: {e}")))
    }

    /// 文件所属学校的 DANE 代码：任一引用它的资源 → 任一日程 → 分配
    pub async fn dane_code_by_file_impl(&self, file_id: i64) -> Result<Option<String>> {
        use crate::entity::resource_schedules::{
            Column as ScheduleColumn, Entity as ResourceSchedules,
        };
        use sea_orm::QueryOrder;

        let links = FileResources::find()
            .filter(FileResourceColumn::FileId.eq(file_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询文件关联失败: {e}")))?;

        let resource_ids: Vec<i64> = links.into_iter().map(|l| l.resource_id).collect();
        if resource_ids.is_empty() {
            return Ok(None);
        }

        let schedule = ResourceSchedules::find()
            .filter(ScheduleColumn::ResourceId.is_in(resource_ids))
            .order_by_asc(ScheduleColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };

        self.dane_code_by_assignment_impl(schedule.assignment_id)
            .await
    }

    /// 删除文件记录
    pub async fn delete_stored_file_row_impl(&self, file_id: i64) -> Result<bool> {
        let result = StoredFiles::delete_by_id(file_id)
            .exec(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("删除文件记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
