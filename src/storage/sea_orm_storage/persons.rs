//! 人员存储操作

use super::SeaOrmStorage;
use crate::entity::persons::{ActiveModel, Column, Entity as Persons};
use crate::errors::{AulaError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::Person,
        requests::{CreatePersonRequest, PersonListQuery},
        responses::PersonListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建人员
    pub async fn create_person_impl(&self, req: CreatePersonRequest) -> Result<Person> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            document_number: Set(req.document_number),
            email: Set(req.email),
            phone: Set(req.phone),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            second_last_name: Set(req.second_last_name),
            other_names: Set(req.other_names),
            photo_url: Set(None),
            role: Set(req.role.to_string()),
            status: Set("active".to_string()),
            password_hash: Set(req.password_hash),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("创建人员失败: {e}")))?;

        Ok(result.into_person())
    }

    /// 通过 ID 获取人员
    pub async fn get_person_by_id_impl(&self, id: i64) -> Result<Option<Person>> {
        let result = Persons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员失败: {e}")))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 按邮箱、证件号或手机号查找人员
    pub async fn find_person_by_identifier_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<Person>> {
        let result = Persons::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(identifier))
                    .add(Column::DocumentNumber.eq(identifier))
                    .add(Column::Phone.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员失败: {e}")))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 找回密码信息校验：三项都要匹配同一条记录
    pub async fn find_person_by_recovery_info_impl(
        &self,
        email: &str,
        phone: &str,
        document_number: &str,
    ) -> Result<Option<Person>> {
        let result = Persons::find()
            .filter(Column::Email.eq(email))
            .filter(Column::Phone.eq(phone))
            .filter(Column::DocumentNumber.eq(document_number))
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员失败: {e}")))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 分页列出人员
    pub async fn list_persons_with_pagination_impl(
        &self,
        query: PersonListQuery,
    ) -> Result<PersonListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Persons::find();

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 搜索条件（姓名或证件号）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped))
                    .add(Column::DocumentNumber.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::LastName);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员页数失败: {e}")))?;

        let persons = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员列表失败: {e}")))?;

        Ok(PersonListResponse {
            items: persons.into_iter().map(|m| m.into_person()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 人员总数
    pub async fn count_persons_impl(&self) -> Result<u64> {
        Persons::find()
            .count(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("统计人员失败: {e}")))
    }

    /// 更新最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let existing = Persons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员失败: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(id),
            last_login: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("更新登录时间失败: {e}")))?;

        Ok(true)
    }

    /// 设置自定义密码
    pub async fn set_person_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let existing = Persons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询人员失败: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        let model = ActiveModel {
            id: Set(id),
            password_hash: Set(Some(password_hash.to_string())),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(true)
    }

    /// 数据库连通性探测
    pub async fn ping_database_impl(&self) -> Result<String> {
        self.db
            .ping()
            .await
            .map_err(|e| AulaError::database_connection(format!("数据库探测失败: {e}")))?;

        Ok(format!("{:?}", self.db.get_database_backend()).to_lowercase())
    }
}
