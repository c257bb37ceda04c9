//! 学科、学期与学校存储操作
//!
//! 多表读取按实体分别查询后在内存中拼装，不使用原生 SQL。

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use super::calendar::day_start_ts;
use crate::entity::academic_assignments::{
    Column as AssignmentColumn, Entity as AcademicAssignments,
};
use crate::entity::academic_years::Entity as AcademicYears;
use crate::entity::campuses::Entity as Campuses;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::groups::Entity as Groups;
use crate::entity::periods::{Column as PeriodColumn, Entity as Periods};
use crate::entity::resource_schedules::{Column as ScheduleColumn, Entity as ResourceSchedules};
use crate::entity::schools::Entity as Schools;
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{AulaError, Result};
use crate::models::subjects::entities::{
    ActivityStats, Assignment, CurrentPeriod, TaughtSubject, pastel_color_for_subject,
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 教师所授学科卡片
    pub async fn list_taught_subjects_impl(&self, teacher_id: i64) -> Result<Vec<TaughtSubject>> {
        let assignments = AcademicAssignments::find()
            .filter(AssignmentColumn::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        // 批量加载关联表，再用 HashMap 拼装
        let group_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.group_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let subject_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.subject_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let groups: HashMap<i64, _> = Groups::find()
            .filter(crate::entity::groups::Column::Id.is_in(group_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询班组失败: {e}")))?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let subjects: HashMap<i64, _> = Subjects::find()
            .filter(crate::entity::subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学科失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let campus_ids: Vec<i64> = groups.values().map(|g| g.campus_id).collect();
        let year_ids: Vec<i64> = groups.values().map(|g| g.year_id).collect();

        let campuses: HashMap<i64, _> = Campuses::find()
            .filter(crate::entity::campuses::Column::Id.is_in(campus_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询校区失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let years: HashMap<i64, _> = AcademicYears::find()
            .filter(crate::entity::academic_years::Column::Id.is_in(year_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学年失败: {e}")))?
            .into_iter()
            .map(|y| (y.id, y))
            .collect();

        let school_ids: Vec<i64> = years.values().map(|y| y.school_id).collect();
        let schools: HashMap<i64, _> = Schools::find()
            .filter(crate::entity::schools::Column::Id.is_in(school_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学校失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        // 在册学生数按班组聚合（inactive = false）
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::GroupId.is_in(group_ids))
            .filter(EnrollmentColumn::Inactive.eq(false))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询名册失败: {e}")))?;

        let mut student_counts: HashMap<i64, i64> = HashMap::new();
        for enrollment in &enrollments {
            *student_counts.entry(enrollment.group_id).or_insert(0) += 1;
        }

        let mut cards: Vec<TaughtSubject> = assignments
            .into_iter()
            .filter_map(|assignment| {
                let group = groups.get(&assignment.group_id)?;
                let subject = subjects.get(&assignment.subject_id)?;

                // 学校名称缺失时回退为校区名称
                let institution_name = years
                    .get(&group.year_id)
                    .and_then(|year| schools.get(&year.school_id))
                    .map(|school| school.name.clone())
                    .or_else(|| campuses.get(&group.campus_id).map(|c| c.name.clone()))
                    .unwrap_or_default();

                Some(TaughtSubject {
                    subject_id: subject.id,
                    assignment_id: assignment.id,
                    subject_name: subject.name.clone(),
                    teacher_id: assignment.teacher_id,
                    group_id: group.id,
                    group_name: group.name.clone(),
                    institution_name,
                    color: pastel_color_for_subject(subject.id),
                    student_count: student_counts.get(&group.id).copied().unwrap_or(0),
                    stats: None,
                })
            })
            .collect();

        // 排序与历史平台一致：学科名，再班组名
        cards.sort_by(|a, b| {
            a.subject_name
                .cmp(&b.subject_name)
                .then_with(|| a.group_name.cmp(&b.group_name))
        });

        Ok(cards)
    }

    /// 班组在册学生数
    pub async fn count_group_students_impl(&self, group_id: i64) -> Result<i64> {
        let count = Enrollments::find()
            .filter(EnrollmentColumn::GroupId.eq(group_id))
            .filter(EnrollmentColumn::Inactive.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("统计班组学生失败: {e}")))?;

        Ok(count as i64)
    }

    /// 某个教学分配的活动统计
    pub async fn activity_stats_impl(
        &self,
        assignment_id: i64,
        today: NaiveDate,
    ) -> Result<ActivityStats> {
        let schedules = ResourceSchedules::find()
            .filter(ScheduleColumn::AssignmentId.eq(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let today_start = day_start_ts(today);
        let mut stats = ActivityStats::default();

        for schedule in &schedules {
            stats.total += 1;
            if !schedule.visible {
                stats.inactive += 1;
            } else if schedule.scheduled_at >= today_start {
                stats.active += 1;
            } else {
                stats.pending += 1;
            }
        }

        Ok(stats)
    }

    /// 包含指定日期的学期
    pub async fn find_period_containing_impl(
        &self,
        date: NaiveDate,
    ) -> Result<Option<CurrentPeriod>> {
        let period = Periods::find()
            .filter(PeriodColumn::StartsOn.lte(date))
            .filter(PeriodColumn::EndsOn.gte(date))
            .order_by_asc(PeriodColumn::Number)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学期失败: {e}")))?;

        let Some(period) = period else {
            return Ok(None);
        };

        self.current_period_from_model(period).await.map(Some)
    }

    /// 某个自然年的最后一个学期
    pub async fn find_last_period_of_year_impl(&self, year: i32) -> Result<Option<CurrentPeriod>> {
        let year_ids: Vec<i64> = AcademicYears::find()
            .filter(crate::entity::academic_years::Column::Year.eq(year))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学年失败: {e}")))?
            .into_iter()
            .map(|y| y.id)
            .collect();

        if year_ids.is_empty() {
            return Ok(None);
        }

        let period = Periods::find()
            .filter(PeriodColumn::YearId.is_in(year_ids))
            .order_by_desc(PeriodColumn::Number)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学期失败: {e}")))?;

        let Some(period) = period else {
            return Ok(None);
        };

        self.current_period_from_model(period).await.map(Some)
    }

    async fn current_period_from_model(
        &self,
        period: crate::entity::periods::Model,
    ) -> Result<CurrentPeriod> {
        let year = AcademicYears::find_by_id(period.year_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(CurrentPeriod {
            period_id: period.id,
            period: period.number.to_string(),
            year_id: period.year_id,
            year: year
                .map(|y| y.year.to_string())
                .unwrap_or_else(|| period.starts_on.format("%Y").to_string()),
        })
    }

    /// 学校名称
    pub async fn get_school_name_impl(&self, school_id: i64) -> Result<Option<String>> {
        let school = Schools::find_by_id(school_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(school.map(|s| s.name))
    }

    /// 教师所属学校（经第一个教学分配）
    pub async fn school_id_by_teacher_impl(&self, teacher_id: i64) -> Result<Option<i64>> {
        let assignment = AcademicAssignments::find()
            .filter(AssignmentColumn::TeacherId.eq(teacher_id))
            .order_by_asc(AssignmentColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        let Some(assignment) = assignment else {
            return Ok(None);
        };

        self.school_id_by_group(assignment.group_id).await
    }

    /// 班组的第一个教学分配
    pub async fn first_assignment_of_group_impl(&self, group_id: i64) -> Result<Option<i64>> {
        let assignment = AcademicAssignments::find()
            .filter(AssignmentColumn::GroupId.eq(group_id))
            .order_by_asc(AssignmentColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        Ok(assignment.map(|a| a.id))
    }

    /// 获取教学分配
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let assignment = AcademicAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        Ok(assignment.map(|a| Assignment {
            id: a.id,
            teacher_id: a.teacher_id,
            group_id: a.group_id,
            subject_id: a.subject_id,
        }))
    }

    /// 教学分配所属学校的 DANE 代码
    pub async fn dane_code_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<String>> {
        let assignment = AcademicAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        let Some(assignment) = assignment else {
            return Ok(None);
        };

        self.dane_code_by_group(assignment.group_id).await
    }

    /// 日程所属学校的 DANE 代码
    pub async fn dane_code_by_schedule_impl(&self, schedule_id: i64) -> Result<Option<String>> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };

        self.dane_code_by_assignment_impl(schedule.assignment_id)
            .await
    }

    // 班组 → 学年 → 学校
    pub(crate) async fn school_id_by_group(&self, group_id: i64) -> Result<Option<i64>> {
        let group = Groups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询班组失败: {e}")))?;

        let Some(group) = group else {
            return Ok(None);
        };

        let year = AcademicYears::find_by_id(group.year_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(year.map(|y| y.school_id))
    }

    async fn dane_code_by_group(&self, group_id: i64) -> Result<Option<String>> {
        let Some(school_id) = self.school_id_by_group(group_id).await? else {
            return Ok(None);
        };

        let school = Schools::find_by_id(school_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(school.map(|s| s.dane_code))
    }
}
