//! 活动写入操作（创建、更新、删除、移动、复制）

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::academic_assignments::{
    Column as AssignmentColumn, Entity as AcademicAssignments,
};
use crate::entity::groups::Entity as Groups;
use crate::entity::resource_hypertexts::{
    ActiveModel as HypertextActiveModel, Column as HypertextColumn, Entity as ResourceHypertexts,
};
use crate::entity::resource_schedules::{
    ActiveModel as ScheduleActiveModel, Column as ScheduleColumn, Entity as ResourceSchedules,
};
use crate::entity::resources::{ActiveModel as ResourceActiveModel, Entity as Resources};
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{AulaError, Result};
use crate::models::calendar::{
    entities::{ActivityDetail, ActivityFile},
    requests::{CreateActivityRequest, DuplicateTarget, UpdateActivityRequest},
    responses::{CreatedActivityResponse, DuplicableActivity, DuplicateTargetGroup},
};
use crate::utils::hypertext::extract_videos;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建活动：资源 + 日程 +（可选）富文本 + 附件关联
    pub async fn create_activity_impl(
        &self,
        request: &CreateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<CreatedActivityResponse> {
        let now = chrono::Utc::now().timestamp();
        let scheduled_at = request
            .scheduled_at
            .map(|at| at.timestamp())
            .unwrap_or(now);

        // 1. 资源
        let resource = ResourceActiveModel {
            title: Set(request.title.clone()),
            description: Set(request.description.clone()),
            resource_type_id: Set(request.activity_type_id),
            requires_deliverable: Set(request.requires_deliverable),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("创建资源失败: {e}")))?;

        // 2. 日程
        let schedule = ScheduleActiveModel {
            assignment_id: Set(request.assignment_id),
            resource_id: Set(resource.id),
            scheduled_at: Set(scheduled_at),
            visible: Set(request.active),
            onsite: Set(false),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("创建活动日程失败: {e}")))?;

        // 3. 富文本
        if let Some(text) = hypertext {
            self.upsert_hypertext(resource.id, &text).await?;
        }

        // 4. 附件关联
        if let Some(ref file_ids) = request.file_ids {
            for file_id in file_ids {
                self.link_file_to_resource_impl(*file_id, resource.id, false)
                    .await?;
            }
        }

        Ok(CreatedActivityResponse {
            schedule_id: schedule.id,
            resource_id: resource.id,
        })
    }

    /// 活动完整详情：资源字段 + 富文本 + 识别出的视频 + 附件
    pub async fn get_activity_detail_impl(
        &self,
        schedule_id: i64,
    ) -> Result<Option<ActivityDetail>> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };

        let resource = Resources::find_by_id(schedule.resource_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询资源失败: {e}")))?
            .ok_or_else(|| {
                AulaError::database_operation(format!(
                    "日程 {schedule_id} 引用的资源 {} 不存在",
                    schedule.resource_id
                ))
            })?;

        let hypertext = self.hypertext_of_resource(resource.id).await?;
        let videos = hypertext
            .as_deref()
            .map(extract_videos)
            .unwrap_or_default();

        let files = self
            .resource_files_impl(resource.id)
            .await?
            .into_iter()
            .map(|(file, renderable)| ActivityFile {
                id: file.id,
                display_name: file.original_name,
                file_type_id: file.file_type_id,
                renderable,
            })
            .collect();

        Ok(Some(ActivityDetail {
            id: schedule.id,
            title: resource.title,
            description: resource.description,
            scheduled_at: DateTime::<Utc>::from_timestamp(schedule.scheduled_at, 0),
            active: schedule.visible,
            requires_deliverable: resource.requires_deliverable,
            hypertext,
            videos,
            // 问题型活动的富文本不做结构化还原，前端按行展示
            questions: Vec::new(),
            files,
        }))
    }

    /// 更新活动：资源字段 + 日程字段 + 富文本 upsert
    pub async fn update_activity_impl(
        &self,
        schedule_id: i64,
        request: &UpdateActivityRequest,
        hypertext: Option<String>,
    ) -> Result<bool> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(false);
        };

        // 资源字段
        ResourceActiveModel {
            id: Set(schedule.resource_id),
            title: Set(request.title.clone()),
            description: Set(request.description.clone()),
            requires_deliverable: Set(request.requires_deliverable),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("更新资源失败: {e}")))?;

        // 日程字段
        let scheduled_at = request
            .scheduled_at
            .map(|at| at.timestamp())
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        ScheduleActiveModel {
            id: Set(schedule_id),
            visible: Set(request.active),
            scheduled_at: Set(scheduled_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("更新活动日程失败: {e}")))?;

        // 富文本
        if let Some(text) = hypertext {
            self.upsert_hypertext(schedule.resource_id, &text).await?;
        }

        // 新附件
        if let Some(ref file_ids) = request.file_ids {
            for file_id in file_ids {
                self.link_file_to_resource_impl(*file_id, schedule.resource_id, false)
                    .await?;
            }
        }

        Ok(true)
    }

    /// 删除活动的数据库记录：富文本、日程、资源
    ///
    /// 附件（磁盘 + 记录）由服务层先处理，因为共享附件要先判断引用数。
    pub async fn delete_activity_rows_impl(&self, schedule_id: i64) -> Result<bool> {
        let schedule = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(false);
        };

        ResourceSchedules::delete_by_id(schedule_id)
            .exec(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("删除活动日程失败: {e}")))?;

        // 资源可能仍被复制出的其他日程引用，只有无人引用时才连富文本一起删除
        let remaining = ResourceSchedules::find()
            .filter(ScheduleColumn::ResourceId.eq(schedule.resource_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        if remaining.is_empty() {
            ResourceHypertexts::delete_many()
                .filter(HypertextColumn::ResourceId.eq(schedule.resource_id))
                .exec(&self.db)
                .await
                .map_err(|e| AulaError::database_operation(format!("删除富文本失败: {e}")))?;

            Resources::delete_by_id(schedule.resource_id)
                .exec(&self.db)
                .await
                .map_err(|e| AulaError::database_operation(format!("删除资源失败: {e}")))?;
        }

        Ok(true)
    }

    /// 拖拽换期
    pub async fn move_activity_impl(
        &self,
        schedule_id: i64,
        scheduled_at: DateTime<Utc>,
    ) -> Result<bool> {
        let existing = ResourceSchedules::find_by_id(schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        ScheduleActiveModel {
            id: Set(schedule_id),
            scheduled_at: Set(scheduled_at.timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("移动活动失败: {e}")))?;

        Ok(true)
    }

    /// 教师在某学科下可复制的活动（新的在前）
    pub async fn duplicable_activities_impl(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<Vec<DuplicableActivity>> {
        let assignments = AcademicAssignments::find()
            .filter(AssignmentColumn::TeacherId.eq(teacher_id))
            .filter(AssignmentColumn::SubjectId.eq(subject_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let subject_name = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询学科失败: {e}")))?
            .map(|s| s.name)
            .unwrap_or_default();

        let group_ids: Vec<i64> = assignments.iter().map(|a| a.group_id).collect();
        let groups: HashMap<i64, _> = Groups::find()
            .filter(crate::entity::groups::Column::Id.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询班组失败: {e}")))?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let assignment_map: HashMap<i64, _> =
            assignments.into_iter().map(|a| (a.id, a)).collect();
        let assignment_ids: Vec<i64> = assignment_map.keys().copied().collect();

        let schedules = ResourceSchedules::find()
            .filter(ScheduleColumn::AssignmentId.is_in(assignment_ids))
            .order_by_desc(ScheduleColumn::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?;

        let resource_ids: Vec<i64> = schedules
            .iter()
            .map(|s| s.resource_id)
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

        let mut items: Vec<DuplicableActivity> = schedules
            .into_iter()
            .filter_map(|schedule| {
                let assignment = assignment_map.get(&schedule.assignment_id)?;
                let group = groups.get(&assignment.group_id)?;
                let title = resources
                    .get(&schedule.resource_id)
                    .map(|r| r.title.clone())?;

                Some(DuplicableActivity {
                    schedule_id: schedule.id,
                    title,
                    scheduled_at: DateTime::<Utc>::from_timestamp(schedule.scheduled_at, 0),
                    assignment_id: assignment.id,
                    grade_level_id: group.grade_level_id,
                    group_name: group.name.clone(),
                    subject_name: subject_name.clone(),
                })
            })
            .collect();

        // 时间相同的按标题排序
        items.sort_by(|a, b| {
            b.scheduled_at
                .cmp(&a.scheduled_at)
                .then_with(|| a.title.cmp(&b.title))
        });

        Ok(items)
    }

    /// 可作为复制目标的班组：同一教师同一学科的其他分配
    pub async fn duplicate_target_groups_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<DuplicateTargetGroup>> {
        let origin = AcademicAssignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        let Some(origin) = origin else {
            return Ok(Vec::new());
        };

        let siblings = AcademicAssignments::find()
            .filter(AssignmentColumn::TeacherId.eq(origin.teacher_id))
            .filter(AssignmentColumn::SubjectId.eq(origin.subject_id))
            .filter(AssignmentColumn::Id.ne(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询教学分配失败: {e}")))?;

        let group_ids: Vec<i64> = siblings.iter().map(|a| a.group_id).collect();
        let groups: HashMap<i64, _> = Groups::find()
            .filter(crate::entity::groups::Column::Id.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询班组失败: {e}")))?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let mut targets: Vec<DuplicateTargetGroup> = siblings
            .into_iter()
            .filter_map(|assignment| {
                let group = groups.get(&assignment.group_id)?;
                Some(DuplicateTargetGroup {
                    assignment_id: assignment.id,
                    group_id: group.id,
                    group_name: group.name.clone(),
                })
            })
            .collect();

        targets.sort_by(|a, b| a.group_name.cmp(&b.group_name));

        Ok(targets)
    }

    /// 复制活动：一个新资源（共享），每个目标一条可见日程
    pub async fn duplicate_activity_impl(
        &self,
        origin_schedule_id: i64,
        targets: &[DuplicateTarget],
    ) -> Result<CreatedActivityResponse> {
        let origin_schedule = ResourceSchedules::find_by_id(origin_schedule_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询活动日程失败: {e}")))?
            .ok_or_else(|| {
                AulaError::not_found(format!("No se encontró la actividad origen {origin_schedule_id}"))
            })?;

        let origin_resource = Resources::find_by_id(origin_schedule.resource_id)
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询资源失败: {e}")))?
            .ok_or_else(|| {
                AulaError::database_operation(format!(
                    "日程 {origin_schedule_id} 引用的资源不存在"
                ))
            })?;

        // 1. 复制资源
        let new_resource = ResourceActiveModel {
            title: Set(origin_resource.title.clone()),
            description: Set(origin_resource.description.clone()),
            resource_type_id: Set(origin_resource.resource_type_id),
            requires_deliverable: Set(origin_resource.requires_deliverable),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| AulaError::database_operation(format!("复制资源失败: {e}")))?;

        // 2. 复制富文本
        if let Some(text) = self.hypertext_of_resource(origin_resource.id).await? {
            self.upsert_hypertext(new_resource.id, &text).await?;
        }

        // 3. 复制附件关联（同一文件，新关联）
        for (file, renderable) in self.resource_files_impl(origin_resource.id).await? {
            self.link_file_to_resource_impl(file.id, new_resource.id, renderable)
                .await?;
        }

        // 4. 每个目标一条日程
        let now = chrono::Utc::now().timestamp();
        let mut first_schedule_id = 0;
        for target in targets {
            let schedule = ScheduleActiveModel {
                assignment_id: Set(target.assignment_id),
                resource_id: Set(new_resource.id),
                scheduled_at: Set(target.scheduled_at().timestamp()),
                visible: Set(true),
                onsite: Set(false),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("创建目标日程失败: {e}")))?;

            if first_schedule_id == 0 {
                first_schedule_id = schedule.id;
            }
        }

        Ok(CreatedActivityResponse {
            schedule_id: first_schedule_id,
            resource_id: new_resource.id,
        })
    }

    // 资源的富文本
    pub(crate) async fn hypertext_of_resource(&self, resource_id: i64) -> Result<Option<String>> {
        let row = ResourceHypertexts::find()
            .filter(HypertextColumn::ResourceId.eq(resource_id))
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询富文本失败: {e}")))?;

        Ok(row.map(|h| h.hypertext))
    }

    // 富文本 upsert：有则更新，无则插入
    pub(crate) async fn upsert_hypertext(&self, resource_id: i64, text: &str) -> Result<()> {
        let existing = ResourceHypertexts::find()
            .filter(HypertextColumn::ResourceId.eq(resource_id))
            .one(&self.db)
            .await
            .map_err(|e| AulaError::database_operation(format!("查询富文本失败: {e}")))?;

        match existing {
            Some(row) => {
                HypertextActiveModel {
                    id: Set(row.id),
                    hypertext: Set(text.to_string()),
                    ..Default::default()
                }
                .update(&self.db)
                .await
                .map_err(|e| AulaError::database_operation(format!("更新富文本失败: {e}")))?;
            }
            None => {
                HypertextActiveModel {
                    resource_id: Set(resource_id),
                    hypertext: Set(text.to_string()),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .map_err(|e| AulaError::database_operation(format!("插入富文本失败: {e}")))?;
            }
        }

        Ok(())
    }
}
