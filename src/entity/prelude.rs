//! 实体 prelude，便于批量导入

pub use super::academic_assignments::Entity as AcademicAssignments;
pub use super::academic_years::Entity as AcademicYears;
pub use super::campuses::Entity as Campuses;
pub use super::enrollments::Entity as Enrollments;
pub use super::file_resources::Entity as FileResources;
pub use super::forum_posts::Entity as ForumPosts;
pub use super::forum_revisions::Entity as ForumRevisions;
pub use super::grade_levels::Entity as GradeLevels;
pub use super::groups::Entity as Groups;
pub use super::help_links::Entity as HelpLinks;
pub use super::periods::Entity as Periods;
pub use super::persons::Entity as Persons;
pub use super::resource_hypertexts::Entity as ResourceHypertexts;
pub use super::resource_schedules::Entity as ResourceSchedules;
pub use super::resource_types::Entity as ResourceTypes;
pub use super::resources::Entity as Resources;
pub use super::schools::Entity as Schools;
pub use super::stored_files::Entity as StoredFiles;
pub use super::subjects::Entity as Subjects;
