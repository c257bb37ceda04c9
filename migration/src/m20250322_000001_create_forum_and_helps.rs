use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::ResourceTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 论坛帖子表 ====================
        manager
            .create_table(
                Table::create()
                    .table(ForumPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumPosts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ForumPosts::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForumPosts::PersonId).big_integer().not_null())
                    .col(ColumnDef::new(ForumPosts::Content).text().not_null())
                    .col(
                        ColumnDef::new(ForumPosts::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ForumPosts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForumPosts::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ForumPosts::Table, ForumPosts::AssignmentId)
                            .to(AcademicAssignments::Table, AcademicAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ForumPosts::Table, ForumPosts::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 论坛帖子编辑历史表 ====================
        manager
            .create_table(
                Table::create()
                    .table(ForumRevisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ForumRevisions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ForumRevisions::PostId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ForumRevisions::PreviousContent)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ForumRevisions::EditedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ForumRevisions::Table, ForumRevisions::PostId)
                            .to(ForumPosts::Table, ForumPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 帮助链接表 ====================
        manager
            .create_table(
                Table::create()
                    .table(HelpLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HelpLinks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HelpLinks::ApplicationCode)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HelpLinks::Name).string().not_null())
                    .col(ColumnDef::new(HelpLinks::Url).string().not_null())
                    .col(ColumnDef::new(HelpLinks::Kind).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_forum_posts_assignment_id")
                    .table(ForumPosts::Table)
                    .col(ForumPosts::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_help_links_application_code")
                    .table(HelpLinks::Table)
                    .col(HelpLinks::ApplicationCode)
                    .to_owned(),
            )
            .await?;

        // 预置活动类型目录（排序与原平台一致）
        let types: [(&str, &str); 17] = [
            ("Video de Enganche", "VE"),
            ("Preguntas problematizadoras", "PP"),
            ("Lección Interactiva", "LI"),
            ("Tarea", "TA"),
            ("Trabajo", "TR"),
            ("Taller", "TL"),
            ("Investigación", "IN"),
            ("Proyecto", "PR"),
            ("Actividad Práctica", "AP"),
            ("Juego Educativo", "JE"),
            ("Presentación (Sliders)", "PS"),
            ("Documento (Archivo)", "DO"),
            ("Recurso de Lectura", "RL"),
            ("Clase Virtual", "CV"),
            ("Encuentro", "EN"),
            ("Resumen clase", "RC"),
            ("Evaluación", "EV"),
        ];

        for (order, (name, abbreviation)) in types.into_iter().enumerate() {
            let insert = Query::insert()
                .into_table(ResourceTypes::Table)
                .columns([
                    ResourceTypes::Name,
                    ResourceTypes::Abbreviation,
                    ResourceTypes::SortOrder,
                    ResourceTypes::InUse,
                ])
                .values_panic([
                    name.into(),
                    abbreviation.into(),
                    ((order + 1) as i32).into(),
                    true.into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelpLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ForumRevisions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ForumPosts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ForumPosts {
    Table,
    Id,
    AssignmentId,
    PersonId,
    Content,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ForumRevisions {
    Table,
    Id,
    PostId,
    PreviousContent,
    EditedAt,
}

#[derive(DeriveIden)]
enum HelpLinks {
    Table,
    Id,
    ApplicationCode,
    Name,
    Url,
    Kind,
}

#[derive(DeriveIden)]
enum AcademicAssignments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Persons {
    Table,
    Id,
}
