//! 论坛存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::forum_posts::{ActiveModel, Column, Entity as ForumPosts};
use crate::entity::forum_revisions::{
    ActiveModel as RevisionActiveModel, Column as RevisionColumn, Entity as ForumRevisions,
};
use crate::entity::persons::Entity as Persons;
use crate::errors::{AulaError, Result};
use crate::models::forum::entities::{ForumPost, ForumRevision};
use crate::models::users::entities::PersonRole;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn into_forum_post(
    model: crate::entity::forum_posts::Model,
    author: Option<&crate::entity::persons::Model>,
) -> ForumPost {
    use crate::models::users::entities::Person;

    let (author_name, author_role) = author
        .map(|p| {
            (
                Person::compose_full_name(
                    &p.last_name,
                    p.second_last_name.as_deref(),
                    &p.first_name,
                    p.other_names.as_deref(),
                ),
                p.role.parse::<PersonRole>().unwrap_or(PersonRole::Student),
            )
        })
        .unwrap_or_else(|| (String::new(), PersonRole::Student));

    ForumPost {
        id: model.id,
        assignment_id: model.assignment_id,
        author_id: model.person_id,
        author_name,
        author_role,
        content: model.content,
        deleted: model.deleted,
        created_at: DateTime::<Utc>::from_timestamp(model.created_at, 0).unwrap_or_default(),
        updated_at: DateTime::<Utc>::from_timestamp(model.updated_at, 0).unwrap_or_default(),
    }
}

impl SeaOrmStorage {
    /// 某个教学分配的帖子，旧的在前
    pub async fn list_forum_posts_impl(
        &self,
        assignment_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<ForumPost>> {
        let mut select = ForumPosts::find().filter(Column::AssignmentId.eq(assignment_id));

        if !include_deleted {
            select = select.filter(Column::Deleted.eq(false));
        }

        let posts = select
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询论坛帖子失败: {e}")))?;

        if posts.is_empty() {
            return Ok(Vec::new());
        }

        // 批量加载作者
        let author_ids: Vec<i64> = posts.iter().map(|p| p.person_id).collect();
        let authors: HashMap<i64, _> = Persons::find()
            .filter(crate::entity::persons::Column::Id.is_in(author_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询帖子作者失败: {e}")))?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.person_id);
                into_forum_post(post, author)
            })
            .collect())
    }

    /// 通过 ID 获取帖子
    pub async fn get_forum_post_impl(&self, post_id: i64) -> Result<Option<ForumPost>> {
        let post = ForumPosts::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询论坛帖子失败: {e}")))?;

        let Some(post) = post else {
            return Ok(None);
        };

        let author = Persons::find_by_id(post.person_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询帖子作者失败: {e}")))?;

        Ok(Some(into_forum_post(post, author.as_ref())))
    }

    /// 发帖
    pub async fn create_forum_post_impl(
        &self,
        assignment_id: i64,
        person_id: i64,
        content: &str,
    ) -> Result<ForumPost> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            person_id: Set(person_id),
            content: Set(content.to_string()),
            deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("发帖失败: {e}")))?;

        let author = Persons::find_by_id(person_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询帖子作者失败: {e}")))?;

        Ok(into_forum_post(result, author.as_ref()))
    }

    /// 编辑帖子：旧内容先写入历史表
    pub async fn update_forum_post_impl(&self, post_id: i64, content: &str) -> Result<bool> {
        let existing = ForumPosts::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询论坛帖子失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let now = chrono::Utc::now().timestamp();

        RevisionActiveModel {
            post_id: Set(post_id),
            previous_content: Set(existing.content.clone()),
            edited_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("保存帖子历史失败: {e}")))?;

        ActiveModel {
            id: Set(post_id),
            content: Set(content.to_string()),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("更新帖子失败: {e}")))?;

        Ok(true)
    }

    /// 软删除帖子
    pub async fn soft_delete_forum_post_impl(&self, post_id: i64) -> Result<bool> {
        let existing = ForumPosts::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询论坛帖子失败: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        ActiveModel {
            id: Set(post_id),
            deleted: Set(true),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("删除帖子失败: {e}")))?;

        Ok(true)
    }

    /// 帖子的编辑历史，新的在前
    pub async fn forum_post_history_impl(&self, post_id: i64) -> Result<Vec<ForumRevision>> {
        let revisions = ForumRevisions::find()
            .filter(RevisionColumn::PostId.eq(post_id))
            .order_by_desc(RevisionColumn::EditedAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询帖子历史失败: {e}")))?;

        Ok(revisions
            .into_iter()
            .map(|r| ForumRevision {
                id: r.id,
                post_id: r.post_id,
                previous_content: r.previous_content,
                edited_at: DateTime::<Utc>::from_timestamp(r.edited_at, 0).unwrap_or_default(),
            })
            .collect())
    }
}
