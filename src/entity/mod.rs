//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_assignments;
pub mod academic_years;
pub mod campuses;
pub mod enrollments;
pub mod file_resources;
pub mod forum_posts;
pub mod forum_revisions;
pub mod grade_levels;
pub mod groups;
pub mod help_links;
pub mod periods;
pub mod persons;
pub mod resource_hypertexts;
pub mod resource_schedules;
pub mod resource_types;
pub mod resources;
pub mod schools;
pub mod stored_files;
pub mod subjects;
