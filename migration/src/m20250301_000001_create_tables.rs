use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建人员表
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Persons::DocumentNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Persons::Email).string().null())
                    .col(ColumnDef::new(Persons::Phone).string().null())
                    .col(ColumnDef::new(Persons::FirstName).string().not_null())
                    .col(ColumnDef::new(Persons::LastName).string().not_null())
                    .col(ColumnDef::new(Persons::SecondLastName).string().null())
                    .col(ColumnDef::new(Persons::OtherNames).string().null())
                    .col(ColumnDef::new(Persons::PhotoUrl).string().null())
                    .col(ColumnDef::new(Persons::Role).string().not_null())
                    .col(ColumnDef::new(Persons::Status).string().not_null())
                    .col(ColumnDef::new(Persons::PasswordHash).string().null())
                    .col(ColumnDef::new(Persons::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Persons::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Persons::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学校表
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(
                        ColumnDef::new(Schools::DaneCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建校区表
        manager
            .create_table(
                Table::create()
                    .table(Campuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campuses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campuses::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Campuses::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Campuses::Table, Campuses::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学年表
        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicYears::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::SchoolId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AcademicYears::Year).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicYears::Table, AcademicYears::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学期表
        manager
            .create_table(
                Table::create()
                    .table(Periods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Periods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Periods::YearId).big_integer().not_null())
                    .col(ColumnDef::new(Periods::Number).integer().not_null())
                    .col(ColumnDef::new(Periods::StartsOn).date().not_null())
                    .col(ColumnDef::new(Periods::EndsOn).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Periods::Table, Periods::YearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建年级表
        manager
            .create_table(
                Table::create()
                    .table(GradeLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradeLevels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GradeLevels::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班组表
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Groups::Name).string().not_null())
                    .col(ColumnDef::new(Groups::CampusId).big_integer().not_null())
                    .col(ColumnDef::new(Groups::YearId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Groups::GradeLevelId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Groups::Table, Groups::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Groups::Table, Groups::YearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Groups::Table, Groups::GradeLevelId)
                            .to(GradeLevels::Table, GradeLevels::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建名册表（班组的学生名单）
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::GroupId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Enrollments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::Inactive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学科表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教学分配表（教师 × 班组 × 学科）
        manager
            .create_table(
                Table::create()
                    .table(AcademicAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicAssignments::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicAssignments::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicAssignments::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicAssignments::Table, AcademicAssignments::TeacherId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicAssignments::Table, AcademicAssignments::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AcademicAssignments::Table, AcademicAssignments::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建活动类型表
        manager
            .create_table(
                Table::create()
                    .table(ResourceTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ResourceTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(ResourceTypes::Abbreviation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceTypes::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceTypes::InUse)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建活动资源表
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resources::Title).string().not_null())
                    .col(ColumnDef::new(Resources::Description).text().null())
                    .col(
                        ColumnDef::new(Resources::ResourceTypeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Resources::RequiresDeliverable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Resources::Table, Resources::ResourceTypeId)
                            .to(ResourceTypes::Table, ResourceTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建活动日程表（一次资源在某个教学分配的日历上的投放）
        manager
            .create_table(
                Table::create()
                    .table(ResourceSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::ResourceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::ScheduledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::Onsite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ResourceSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ResourceSchedules::Table, ResourceSchedules::AssignmentId)
                            .to(AcademicAssignments::Table, AcademicAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ResourceSchedules::Table, ResourceSchedules::ResourceId)
                            .to(Resources::Table, Resources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建富文本表（每个资源最多一条）
        manager
            .create_table(
                Table::create()
                    .table(ResourceHypertexts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ResourceHypertexts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ResourceHypertexts::ResourceId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ResourceHypertexts::Hypertext)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ResourceHypertexts::Table, ResourceHypertexts::ResourceId)
                            .to(Resources::Table, Resources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表
        manager
            .create_table(
                Table::create()
                    .table(StoredFiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoredFiles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StoredFiles::OriginalName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StoredFiles::UniqueName).string().not_null())
                    .col(
                        ColumnDef::new(StoredFiles::FileTypeId)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(StoredFiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件-资源关联表
        manager
            .create_table(
                Table::create()
                    .table(FileResources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileResources::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FileResources::FileId).big_integer().not_null())
                    .col(
                        ColumnDef::new(FileResources::ResourceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FileResources::Renderable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileResources::Table, FileResources::FileId)
                            .to(StoredFiles::Table, StoredFiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FileResources::Table, FileResources::ResourceId)
                            .to(Resources::Table, Resources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 人员表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_persons_email")
                    .table(Persons::Table)
                    .col(Persons::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_persons_phone")
                    .table(Persons::Table)
                    .col(Persons::Phone)
                    .to_owned(),
            )
            .await?;

        // 教学分配表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_teacher_id")
                    .table(AcademicAssignments::Table)
                    .col(AcademicAssignments::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_group_id")
                    .table(AcademicAssignments::Table)
                    .col(AcademicAssignments::GroupId)
                    .to_owned(),
            )
            .await?;

        // 活动日程表索引（日历查询按分配 + 日期）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedules_assignment_scheduled")
                    .table(ResourceSchedules::Table)
                    .col(ResourceSchedules::AssignmentId)
                    .col(ResourceSchedules::ScheduledAt)
                    .to_owned(),
            )
            .await?;

        // 名册表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_group_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::GroupId)
                    .to_owned(),
            )
            .await?;

        // 文件关联表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_file_resources_resource_id")
                    .table(FileResources::Table)
                    .col(FileResources::ResourceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(FileResources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StoredFiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceHypertexts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResourceTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GradeLevels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Periods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicYears::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
    DocumentNumber,
    Email,
    Phone,
    FirstName,
    LastName,
    SecondLastName,
    OtherNames,
    PhotoUrl,
    Role,
    Status,
    PasswordHash,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Name,
    DaneCode,
}

#[derive(DeriveIden)]
enum Campuses {
    Table,
    Id,
    SchoolId,
    Name,
}

#[derive(DeriveIden)]
enum AcademicYears {
    Table,
    Id,
    SchoolId,
    Year,
}

#[derive(DeriveIden)]
enum Periods {
    Table,
    Id,
    YearId,
    Number,
    StartsOn,
    EndsOn,
}

#[derive(DeriveIden)]
enum GradeLevels {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
    Name,
    CampusId,
    YearId,
    GradeLevelId,
}

#[derive(DeriveIden)]
enum Enrollments {
    Table,
    Id,
    GroupId,
    StudentId,
    Inactive,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum AcademicAssignments {
    Table,
    Id,
    TeacherId,
    GroupId,
    SubjectId,
}

#[derive(DeriveIden)]
pub enum ResourceTypes {
    Table,
    Id,
    Name,
    Abbreviation,
    SortOrder,
    InUse,
}

#[derive(DeriveIden)]
enum Resources {
    Table,
    Id,
    Title,
    Description,
    ResourceTypeId,
    RequiresDeliverable,
}

#[derive(DeriveIden)]
enum ResourceSchedules {
    Table,
    Id,
    AssignmentId,
    ResourceId,
    ScheduledAt,
    Visible,
    Onsite,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ResourceHypertexts {
    Table,
    Id,
    ResourceId,
    Hypertext,
}

#[derive(DeriveIden)]
enum StoredFiles {
    Table,
    Id,
    OriginalName,
    UniqueName,
    FileTypeId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FileResources {
    Table,
    Id,
    FileId,
    ResourceId,
    Renderable,
}
