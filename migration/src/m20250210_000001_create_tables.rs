use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Modules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modules::Name).string().not_null())
                    .col(
                        ColumnDef::new(Modules::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教授表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Professors::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程开课实例表
        manager
            .create_table(
                Table::create()
                    .table(ModuleInstances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModuleInstances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ModuleInstances::ModuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ModuleInstances::Year).integer().not_null())
                    .col(
                        ColumnDef::new(ModuleInstances::Semester)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ModuleInstances::Table, ModuleInstances::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建开课实例与教授的关联表
        manager
            .create_table(
                Table::create()
                    .table(ModuleInstanceProfessors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModuleInstanceProfessors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ModuleInstanceProfessors::ModuleInstanceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ModuleInstanceProfessors::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ModuleInstanceProfessors::Table,
                                ModuleInstanceProfessors::ModuleInstanceId,
                            )
                            .to(ModuleInstances::Table, ModuleInstances::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ModuleInstanceProfessors::Table,
                                ModuleInstanceProfessors::ProfessorId,
                            )
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分表
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Ratings::ModuleInstanceProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ratings::Rating).integer().not_null())
                    .col(ColumnDef::new(Ratings::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Ratings::Table, Ratings::ModuleInstanceProfessorId)
                            .to(ModuleInstanceProfessors::Table, ModuleInstanceProfessors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 邮箱唯一
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 开课实例索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_module_instances_module_term")
                    .table(ModuleInstances::Table)
                    .col(ModuleInstances::ModuleId)
                    .col(ModuleInstances::Year)
                    .col(ModuleInstances::Semester)
                    .to_owned(),
            )
            .await?;

        // 同一开课实例内教授不重复
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mip_instance_professor")
                    .table(ModuleInstanceProfessors::Table)
                    .col(ModuleInstanceProfessors::ModuleInstanceId)
                    .col(ModuleInstanceProfessors::ProfessorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mip_professor_id")
                    .table(ModuleInstanceProfessors::Table)
                    .col(ModuleInstanceProfessors::ProfessorId)
                    .to_owned(),
            )
            .await?;

        // 每个用户对同一授课只能评分一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_user_mip")
                    .table(Ratings::Table)
                    .col(Ratings::UserId)
                    .col(Ratings::ModuleInstanceProfessorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ratings_mip_id")
                    .table(Ratings::Table)
                    .col(Ratings::ModuleInstanceProfessorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModuleInstanceProfessors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModuleInstances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Modules {
    #[sea_orm(iden = "modules")]
    Table,
    Id,
    Name,
    Code,
}

#[derive(DeriveIden)]
enum Professors {
    #[sea_orm(iden = "professors")]
    Table,
    Id,
    Name,
    Code,
}

#[derive(DeriveIden)]
enum ModuleInstances {
    #[sea_orm(iden = "module_instances")]
    Table,
    Id,
    ModuleId,
    Year,
    Semester,
}

#[derive(DeriveIden)]
enum ModuleInstanceProfessors {
    #[sea_orm(iden = "module_instance_professors")]
    Table,
    Id,
    ModuleInstanceId,
    ProfessorId,
}

#[derive(DeriveIden)]
enum Ratings {
    #[sea_orm(iden = "ratings")]
    Table,
    Id,
    UserId,
    ModuleInstanceProfessorId,
    Rating,
    CreatedAt,
}
