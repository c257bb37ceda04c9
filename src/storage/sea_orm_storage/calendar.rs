//! 日历读取操作
//!
//! 按日/按月/按班组的活动查询。日程先按时间窗过滤，关联数据
//! （资源、类型、分配、教师、学科）批量加载后在内存中拼装。

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::academic_assignments::{
    Column as AssignmentColumn, Entity as AcademicAssignments,
};
use crate::entity::groups::Entity as Groups;
use crate::entity::periods::{Column as PeriodColumn, Entity as Periods};
use crate::entity::persons::Entity as Persons;
use crate::entity::resource_schedules::{Column as ScheduleColumn, Entity as ResourceSchedules};
use crate::entity::resource_types::{Column as ResourceTypeColumn, Entity as ResourceTypes};
use crate::entity::resources::Entity as Resources;
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{AulaError, Result};
use crate::models::calendar::entities::{ActivityType, CalendarActivity};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

/// 某天零点的 unix 时间戳（UTC）
pub(crate) fn day_start_ts(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// 某天的时间窗 [零点, 次日零点)
pub(crate) fn day_bounds(date: NaiveDate) -> (i64, i64) {
    let start = day_start_ts(date);
    (start, start + 86_400)
}

/// 某个月的时间窗 [1 号零点, 下月 1 号零点)
pub(crate) fn month_bounds(year: i32, month: u32) -> Option<(i64, i64)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((day_start_ts(first), day_start_ts(next_first)))
}

impl SeaOrmStorage {
    /// 某个教学分配某天的活动
    pub async fn activities_on_date_impl(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>> {
        let (from, to) = day_bounds(date);
        let schedules = ResourceSchedules::find()
            .filter(ScheduleColumn::AssignmentId.eq(assignment_id))
            .filter(ScheduleColumn::ScheduledAt.gte(from))
            .filter(ScheduleColumn::ScheduledAt.lt(to))
            .order_by_asc(ScheduleColumn::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let (year_id, period_id) = self.year_and_period_for_assignment(assignment_id, date).await?;
        self.assemble_calendar_rows(schedules, year_id, period_id)
            .await
    }

    /// 某个教学分配某个月的活动
    pub async fn activities_in_month_impl(
        &self,
        assignment_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarActivity>> {
        let Some((from, to)) = month_bounds(year, month) else {
            return Err(AulaError::validation(format!(
                "Invalid calendar month: {year}-{month}"
            )));
        };

        let schedules = ResourceSchedules::find()
            .filter(ScheduleColumn::AssignmentId.eq(assignment_id))
            .filter(ScheduleColumn::ScheduledAt.gte(from))
            .filter(ScheduleColumn::ScheduledAt.lt(to))
            .order_by_asc(ScheduleColumn::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let reference_date =
            NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| Utc::now().date_naive());
        let (year_id, period_id) = self
            .year_and_period_for_assignment(assignment_id, reference_date)
            .await?;
        self.assemble_calendar_rows(schedules, year_id, period_id)
            .await
    }

    /// 班组（所有教师）某天的活动
    pub async fn group_activities_on_date_impl(
        &self,
        group_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<CalendarActivity>> {
        let assignment_ids: Vec<i64> = AcademicAssignments::find()
            .filter(AssignmentColumn::GroupId.eq(group_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?
            .into_iter()
            .map(|a| a.id)
            .collect();

        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let (from, to) = day_bounds(date);
        let schedules = ResourceSchedules::find()
            .filter(ScheduleColumn::AssignmentId.is_in(assignment_ids))
            .filter(ScheduleColumn::ScheduledAt.gte(from))
            .filter(ScheduleColumn::ScheduledAt.lt(to))
            .order_by_asc(ScheduleColumn::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let (year_id, period_id) = self.year_and_period_for_group(group_id, date).await?;
        let mut rows = self
            .assemble_calendar_rows(schedules, year_id, period_id)
            .await?;

        // 班组视图按时间，再按学科名排序
        rows.sort_by(|a, b| {
            a.scheduled_at
                .cmp(&b.scheduled_at)
                .then_with(|| a.subject_name.cmp(&b.subject_name))
        });

        Ok(rows)
    }

    /// 在用的活动类型
    pub async fn list_activity_types_impl(&self) -> Result<Vec<ActivityType>> {
        let types = ResourceTypes::find()
            .filter(ResourceTypeColumn::InUse.eq(true))
            .order_by_asc(ResourceTypeColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动类型失败: {e}")))?;

        Ok(types
            .into_iter()
            .map(|t| ActivityType {
                id: t.id,
                icon: ActivityType::icon_for(&t.name).to_string(),
                name: t.name,
            })
            .collect())
    }

    /// 日程的创建教师
    pub async fn schedule_creator_impl(&self, schedule_id: i64) -> Result<Option<i64>> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };

        let assignment = AcademicAssignments::find_by_id(schedule.assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        Ok(assignment.map(|a| a.teacher_id))
    }

    /// 日程对应的资源
    pub async fn schedule_resource_id_impl(&self, schedule_id: i64) -> Result<Option<i64>> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        Ok(schedule.map(|s| s.resource_id))
    }

    /// 引用某个资源的日程数
    pub async fn resource_schedule_count_impl(&self, resource_id: i64) -> Result<u64> {
        ResourceSchedules::find()
            .filter(ScheduleColumn::ResourceId.eq(resource_id))
            .count(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("统计资源日程失败: {e}")))
    }

    /// 解析某个教学分配在指定日期所处的学年与学期
    ///
    /// 优先取包含指定日期的学期，其次取包含今天的学期；都没有时
    /// 学期为 0，只返回班组的学年。
    pub(crate) async fn year_and_period_for_assignment(
        &self,
        assignment_id: i64,
        date: NaiveDate,
    ) -> Result<(i64, i64)> {
        let assignment = AcademicAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        let Some(assignment) = assignment else {
            return Ok((0, 0));
        };

        self.year_and_period_for_group(assignment.group_id, date)
            .await
    }

    pub(crate) async fn year_and_period_for_group(
        &self,
        group_id: i64,
        date: NaiveDate,
    ) -> Result<(i64, i64)> {
        let group = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询班组失败: {e}")))?;

        let Some(group) = group else {
            return Ok((0, 0));
        };

        let periods = Periods::find()
            .filter(PeriodColumn::YearId.eq(group.year_id))
            .order_by_asc(PeriodColumn::Number)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学期失败: {e}")))?;

        let today = Utc::now().date_naive();
        let period_id = periods
            .iter()
            .find(|p| p.contains(date))
            .or_else(|| periods.iter().find(|p| p.contains(today)))
            .map(|p| p.id)
            .unwrap_or(0);

        Ok((group.year_id, period_id))
    }

    // 把日程拼装成日历行：批量加载资源、类型、分配、教师、学科
    async fn assemble_calendar_rows(
        &self,
        schedules: Vec<crate::entity::resource_schedules::Model>,
        year_id: i64,
        period_id: i64,
    ) -> Result<Vec<CalendarActivity>> {
        if schedules.is_empty() {
            return Ok(Vec::new());
        }

        let resource_ids: Vec<i64> = schedules
            .iter()
            .map(|s| s.resource_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let assignment_ids: Vec<i64> = schedules
            .iter()
            .map(|s| s.assignment_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let resources: HashMap<i64, _> = Resources::find()
            .filter(crate::entity::resources::Column::Id.is_in(resource_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询资源失败: {e}")))?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let type_ids: Vec<i64> = resources.values().map(|r| r.resource_type_id).collect();
        let types: HashMap<i64, _> = ResourceTypes::find()
            .filter(ResourceTypeColumn::Id.is_in(type_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动类型失败: {e}")))?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let assignments: HashMap<i64, _> = AcademicAssignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let teacher_ids: Vec<i64> = assignments.values().map(|a| a.teacher_id).collect();
        let teachers: HashMap<i64, _> = Persons::find()
            .filter(crate::entity::persons::Column::Id.is_in(teacher_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教师失败: {e}")))?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let subject_ids: Vec<i64> = assignments.values().map(|a| a.subject_id).collect();
        let subjects: HashMap<i64, _> = Subjects::find()
            .filter(crate::entity::subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学科失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let rows = schedules
            .into_iter()
            .map(|schedule| {
                let resource = resources.get(&schedule.resource_id);
                // 类型被停用或删除时按 "Sin tipo" 展示，不丢行
                let (type_id, type_name) = resource
                    .and_then(|r| types.get(&r.resource_type_id))
                    .map(|t| (t.id, t.name.clone()))
                    .unwrap_or((0, "Sin tipo".to_string()));

                let assignment = assignments.get(&schedule.assignment_id);
                let teacher = assignment.and_then(|a| teachers.get(&a.teacher_id));
                let subject = assignment.and_then(|a| subjects.get(&a.subject_id));

                CalendarActivity {
                    id: schedule.id,
                    activity_type_id: type_id,
                    activity_type: type_name,
                    title: resource.map(|r| r.title.clone()),
                    scheduled_at: DateTime::<Utc>::from_timestamp(schedule.scheduled_at, 0)
                        .unwrap_or_default(),
                    created_at: DateTime::<Utc>::from_timestamp(schedule.created_at, 0),
                    assignment_id: schedule.assignment_id,
                    year_id,
                    period_id,
                    deleted: !schedule.visible,
                    teacher_id: teacher.map(|t| t.id),
                    teacher_name: teacher.map(|t| format!("{} {}", t.first_name, t.last_name)),
                    subject_name: subject.map(|s| s.name.clone()),
                }
            })
            .collect();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_cover_one_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let (from, to) = day_bounds(date);
        assert_eq!(to - from, 86_400);
        assert_eq!(from % 86_400, 0);
    }

    #[test]
    fn test_month_bounds_december_wraps_year() {
        let (from, to) = month_bounds(2024, 12).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(from, day_start_ts(first));
        assert_eq!(to, day_start_ts(next));
    }

    #[test]
    fn test_month_bounds_rejects_invalid_month() {
        assert!(month_bounds(2025, 13).is_none());
        assert!(month_bounds(2025, 0).is_none());
    }
}
