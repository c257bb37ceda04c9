use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 人员管理方法
    // 创建人员（启动播种管理员也走这里）
    async fn create_person(&self, person: CreatePersonRequest) -> Result<Person>;
    // 通过ID获取人员信息
    async fn get_person_by_id(&self, id: i64) -> Result<Option<Person>>;
    // 通过邮箱、证件号或手机号获取人员信息
    async fn find_person_by_identifier(&self, identifier: &str) -> Result<Option<Person>>;
    // 找回密码：邮箱、手机号、证件号三项都匹配才算同一个人
    async fn find_person_by_recovery_info(
        &self,
        email: &str,
        phone: &str,
        document_number: &str,
    ) -> Result<Option<Person>>;
    // 分页列出人员
    async fn list_persons_with_pagination(
        &self,
        query: PersonListQuery,
    ) -> Result<PersonListResponse>;
    // 统计人员总数
    async fn count_persons(&self) -> Result<u64>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 设置自定义密码（bcrypt 哈希），此后证件号回退失效
    async fn set_person_password(&self, id: i64, password_hash: &str) -> Result<bool>;

    /// 学科与学期方法
    // 教师所授学科卡片（不含活动统计，由服务层补充）
    async fn list_taught_subjects(&self, teacher_id: i64) -> Result<Vec<TaughtSubject>>;
    // 班组在册学生数
    async fn count_group_students(&self, group_id: i64) -> Result<i64>;
    // 某个教学分配的活动统计
    async fn activity_stats(&self, assignment_id: i64, today: NaiveDate) -> Result<ActivityStats>;
    // 包含指定日期的学期
    async fn find_period_containing(&self, date: NaiveDate) -> Result<Option<CurrentPeriod>>;
    // 某个自然年的最后一个学期
    async fn find_last_period_of_year(&self, year: i32) -> Result<Option<CurrentPeriod>>;
    // 学校名称
    async fn get_school_name(&self, school_id: i64) -> Result<Option<String>>;
    // 教师所属学校（经分配 → 班组 → 学年）
    async fn school_id_by_teacher(&self, teacher_id: i64) -> Result<Option<i64>>;
    // 班组的第一个教学分配
    async fn first_assignment_of_group(&self, group_id: i64) -> Result<Option<i64>>;
    // 获取教学分配
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 教学分配所属学校的 DANE 代码
    async fn dane_code_by_assignment(&self, assignment_id: i64) -> Result<Option<String>>;
    // 日程所属学校的 DANE 代码
    async fn dane_code_by_schedule(&self, schedule_id: i64) -> Result<Option<String>>;
    // 教学分配在指定日期所处的学年与学期（找不到学期时学期为 0）
    async fn assignment_year_and_period(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<(i64, i64)>;

    /// 日历方法
    // 某个教学分配某天的活动
    async fn activities_on_date(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>>;
    // 某个教学分配某个月的活动
    async fn activities_in_month(
        &self,
        assignment_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarActivity>>;
    // 班组（所有教师）某天的活动
    async fn group_activities_on_date(
        &self,
        group_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>>;
    // 在用的活动类型
    async fn list_activity_types(&self) -> Result<Vec<ActivityType>>;
    // 创建活动：资源 + 日程 +（可选）富文本 + 附件关联
    async fn create_activity(
        &self,
        request: &CreateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<CreatedActivityResponse>;
    // 活动完整详情
    async fn get_activity_detail(&self, schedule_id: i64) -> Result<Option<ActivityDetail>>;
    // 日程的创建教师（经教学分配）
    async fn schedule_creator(&self, schedule_id: i64) -> Result<Option<i64>>;
    // 日程对应的资源
    async fn schedule_resource_id(&self, schedule_id: i64) -> Result<Option<i64>>;
    // 引用某个资源的日程数（复制的活动共享资源）
    async fn resource_schedule_count(&self, resource_id: i64) -> Result<u64>;
    // 更新活动（资源字段 + 日程字段 + 富文本 upsert）
    async fn update_activity(
        &self,
        schedule_id: i64,
        request: &UpdateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<bool>;
    // 删除活动的数据库记录（富文本、日程、资源；附件由服务层先行处理）
    async fn delete_activity_rows(&self, schedule_id: i64) -> Result<bool>;
    // 拖拽换期：只改日历时刻
    async fn move_activity(
        &self,
        schedule_id: i64,
        scheduled_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool>;
    // 教师在某学科下可复制的活动
    async fn duplicable_activities(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<Vec<DuplicableActivity>>;
    // 可作为复制目标的班组（同一教师同一学科，排除来源）
    async fn duplicate_target_groups(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<DuplicateTargetGroup>>;
    // 复制活动：一个新资源，每个目标一条日程
    async fn duplicate_activity(
        &self,
        origin_schedule_id: i64,
        targets: &[DuplicateTarget],
    ) -> Result<CreatedActivityResponse>;

    /// 文件方法
    // 登记上传的附件
    async fn insert_stored_file(
        &self,
        original_name: &str,
        unique_name: &str,
        file_type_id: i32,
    ) -> Result<StoredFile>;
    // 通过ID获取文件
    async fn get_stored_file(&self, file_id: i64) -> Result<Option<StoredFile>>;
    // 把文件关联到资源
    async fn link_file_to_resource(
        &self,
        file_id: i64,
        resource_id: i64,
        renderable: bool,
    ) -> Result<()>;
    // 资源的附件及 renderable 标记
    async fn resource_files(&self, resource_id: i64) -> Result<Vec<(StoredFile, bool)>>;
    // 解除文件与资源的关联
    async fn unlink_file_from_resource(&self, file_id: i64, resource_id: i64) -> Result<()>;
    // 文件还被多少资源引用（复制的活动共享附件）
    async fn file_link_count(&self, file_id: i64) -> Result<u64>;
    // 删除文件记录
    async fn delete_stored_file_row(&self, file_id: i64) -> Result<bool>;
    // 文件所属学校的 DANE 代码（经任一引用它的资源的日程）
    async fn dane_code_by_file(&self, file_id: i64) -> Result<Option<String>>;

    /// 论坛方法
    // 某个教学分配的帖子，教师端包含软删除的
    async fn list_forum_posts(
        &self,
        assignment_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<ForumPost>>;
    // 通过ID获取帖子
    async fn get_forum_post(&self, post_id: i64) -> Result<Option<ForumPost>>;
    // 发帖
    async fn create_forum_post(
        &self,
        assignment_id: i64,
        person_id: i64,
        content: &str,
    ) -> Result<ForumPost>;
    // 编辑帖子，旧内容进入历史表
    async fn update_forum_post(&self, post_id: i64, content: &str) -> Result<bool>;
    // 软删除帖子
    async fn soft_delete_forum_post(&self, post_id: i64) -> Result<bool>;
    // 帖子的编辑历史，新的在前
    async fn forum_post_history(&self, post_id: i64) -> Result<Vec<ForumRevision>>;

    /// 帮助方法
    // 按代码取帮助链接（VIDEO 在组件代码上，PDF 在代码 + 1 上）
    async fn help_links_by_codes(
        &self,
        video_code: i32,
        pdf_code: i32,
    ) -> Result<Vec<(HelpLink, Option<HelpKind>)>>;

    /// 系统方法
    // 数据库连通性探测，返回后端类型
    async fn ping_database(&self) -> Result<String>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
