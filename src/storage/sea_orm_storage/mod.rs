//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod calendar;
mod files;
mod forum;
mod helps;
mod persons;
mod resources;
mod subjects;

use crate::config::AppConfig;
use crate::errors::{AulaError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AulaError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AulaError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AulaError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AulaError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AulaError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use chrono::NaiveDate;

use crate::models::{
    calendar::{
        entities::{ActivityDetail, ActivityType, CalendarActivity},
        requests::{CreateActivityRequest, DuplicateTarget, UpdateActivityRequest},
        responses::{CreatedActivityResponse, DuplicableActivity, DuplicateTargetGroup},
    },
    files::entities::StoredFile,
    forum::entities::{ForumPost, ForumRevision},
    helps::entities::{HelpKind, HelpLink},
    subjects::entities::{ActivityStats, Assignment, CurrentPeriod, TaughtSubject},
    users::{
        entities::Person,
        requests::{CreatePersonRequest, PersonListQuery},
        responses::PersonListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 人员模块
    async fn create_person(&self, person: CreatePersonRequest) -> Result<Person> {
        self.create_person_impl(person).await
    }

    async fn get_person_by_id(&self, id: i64) -> Result<Option<Person>> {
        self.get_person_by_id_impl(id).await
    }

    async fn find_person_by_identifier(&self, identifier: &str) -> Result<Option<Person>> {
        self.find_person_by_identifier_impl(identifier).await
    }

    async fn find_person_by_recovery_info(
        &self,
        email: &str,
        phone: &str,
        document_number: &str,
    ) -> Result<Option<Person>> {
        self.find_person_by_recovery_info_impl(email, phone, document_number)
            .await
    }

    async fn list_persons_with_pagination(
        &self,
        query: PersonListQuery,
    ) -> Result<PersonListResponse> {
        self.list_persons_with_pagination_impl(query).await
    }

    async fn count_persons(&self) -> Result<u64> {
        self.count_persons_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn set_person_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.set_person_password_impl(id, password_hash).await
    }

    // 学科与学期模块
    async fn list_taught_subjects(&self, teacher_id: i64) -> Result<Vec<TaughtSubject>> {
        self.list_taught_subjects_impl(teacher_id).await
    }

    async fn count_group_students(&self, group_id: i64) -> Result<i64> {
        self.count_group_students_impl(group_id).await
    }

    async fn activity_stats(&self, assignment_id: i64, today: NaiveDate) -> Result<ActivityStats> {
        self.activity_stats_impl(assignment_id, today).await
    }

    async fn find_period_containing(&self, date: NaiveDate) -> Result<Option<CurrentPeriod>> {
        self.find_period_containing_impl(date).await
    }

    async fn find_last_period_of_year(&self, year: i32) -> Result<Option<CurrentPeriod>> {
        self.find_last_period_of_year_impl(year).await
    }

    async fn get_school_name(&self, school_id: i64) -> Result<Option<String>> {
        self.get_school_name_impl(school_id).await
    }

    async fn school_id_by_teacher(&self, teacher_id: i64) -> Result<Option<i64>> {
        self.school_id_by_teacher_impl(teacher_id).await
    }

    async fn first_assignment_of_group(&self, group_id: i64) -> Result<Option<i64>> {
        self.first_assignment_of_group_impl(group_id).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn dane_code_by_assignment(&self, assignment_id: i64) -> Result<Option<String>> {
        self.dane_code_by_assignment_impl(assignment_id).await
    }

    async fn dane_code_by_schedule(&self, schedule_id: i64) -> Result<Option<String>> {
        self.dane_code_by_schedule_impl(schedule_id).await
    }

    async fn assignment_year_and_period(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<(i64, i64)> {
        self.year_and_period_for_assignment(assignment_id, date)
            .await
    }

    // 日历模块
    async fn activities_on_date(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>> {
        self.activities_on_date_impl(assignment_id, date).await
    }

    async fn activities_in_month(
        &self,
        assignment_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarActivity>> {
        self.activities_in_month_impl(assignment_id, year, month)
            .await
    }

    async fn group_activities_on_date(
        &self,
        group_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>> {
        self.group_activities_on_date_impl(group_id, date).await
    }

    async fn list_activity_types(&self) -> Result<Vec<ActivityType>> {
        self.list_activity_types_impl().await
    }

    async fn create_activity(
        &self,
        request: &CreateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<CreatedActivityResponse> {
        self.create_activity_impl(request, hypertext).await
    }

    async fn get_activity_detail(&self, schedule_id: i64) -> Result<Option<ActivityDetail>> {
        self.get_activity_detail_impl(schedule_id).await
    }

    async fn schedule_creator(&self, schedule_id: i64) -> Result<Option<i64>> {
        self.schedule_creator_impl(schedule_id).await
    }

    async fn schedule_resource_id(&self, schedule_id: i64) -> Result<Option<i64>> {
        self.schedule_resource_id_impl(schedule_id).await
    }

    async fn resource_schedule_count(&self, resource_id: i64) -> Result<u64> {
        self.resource_schedule_count_impl(resource_id).await
    }

    async fn update_activity(
        &self,
        schedule_id: i64,
        request: &UpdateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<bool> {
        self.update_activity_impl(schedule_id, request, hypertext)
            .await
    }

    async fn delete_activity_rows(&self, schedule_id: i64) -> Result<bool> {
        self.delete_activity_rows_impl(schedule_id).await
    }

    async fn move_activity(
        &self,
        schedule_id: i64,
        scheduled_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool> {
        self.move_activity_impl(schedule_id, scheduled_at).await
    }

    async fn duplicable_activities(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<Vec<DuplicableActivity>> {
        self.duplicable_activities_impl(teacher_id, subject_id)
            .await
    }

    async fn duplicate_target_groups(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<DuplicateTargetGroup>> {
        self.duplicate_target_groups_impl(assignment_id).await
    }

    async fn duplicate_activity(
        &self,
        origin_schedule_id: i64,
        targets: &[DuplicateTarget],
    ) -> Result<CreatedActivityResponse> {
        self.duplicate_activity_impl(origin_schedule_id, targets)
            .await
    }

    // 文件模块
    async fn insert_stored_file(
        &self,
        original_name: &str,
        unique_name: &str,
        file_type_id: i32,
    ) -> Result<StoredFile> {
        self.insert_stored_file_impl(original_name, unique_name, file_type_id)
            .await
    }

    async fn get_stored_file(&self, file_id: i64) -> Result<Option<StoredFile>> {
        self.get_stored_file_impl(file_id).await
    }

    async fn link_file_to_resource(
        &self,
        file_id: i64,
        resource_id: i64,
        renderable: bool,
    ) -> Result<()> {
        self.link_file_to_resource_impl(file_id, resource_id, renderable)
            .await
    }

    async fn resource_files(&self, resource_id: i64) -> Result<Vec<(StoredFile, bool)>> {
        self.resource_files_impl(resource_id).await
    }

    async fn unlink_file_from_resource(&self, file_id: i64, resource_id: i64) -> Result<()> {
        self.unlink_file_from_resource_impl(file_id, resource_id)
            .await
    }

    async fn file_link_count(&self, file_id: i64) -> Result<u64> {
        self.file_link_count_impl(file_id).await
    }

    async fn delete_stored_file_row(&self, file_id: i64) -> Result<bool> {
        self.delete_stored_file_row_impl(file_id).await
    }

    async fn dane_code_by_file(&self, file_id: i64) -> Result<Option<String>> {
        self.dane_code_by_file_impl(file_id).await
    }

    // 论坛模块
    async fn list_forum_posts(
        &self,
        assignment_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<ForumPost>> {
        self.list_forum_posts_impl(assignment_id, include_deleted)
            .await
    }

    async fn get_forum_post(&self, post_id: i64) -> Result<Option<ForumPost>> {
        self.get_forum_post_impl(post_id).await
    }

    async fn create_forum_post(
        &self,
        assignment_id: i64,
        person_id: i64,
        content: &str,
    ) -> Result<ForumPost> {
        self.create_forum_post_impl(assignment_id, person_id, content)
            .await
    }

    async fn update_forum_post(&self, post_id: i64, content: &str) -> Result<bool> {
        self.update_forum_post_impl(post_id, content).await
    }

    async fn soft_delete_forum_post(&self, post_id: i64) -> Result<bool> {
        self.soft_delete_forum_post_impl(post_id).await
    }

    async fn forum_post_history(&self, post_id: i64) -> Result<Vec<ForumRevision>> {
        self.forum_post_history_impl(post_id).await
    }

    // 帮助模块
    async fn help_links_by_codes(
        &self,
        video_code: i32,
        pdf_code: i32,
    ) -> Result<Vec<(HelpLink, Option<HelpKind>)>> {
        self.help_links_by_codes_impl(video_code, pdf_code).await
    }

    // 系统模块
    async fn ping_database(&self) -> Result<String> {
        self.ping_database_impl().await
    }
}
