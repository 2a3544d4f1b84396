use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::Name))
                    .col(string(Member::Nickname))
                    .col(string(Member::Classification))
                    .col(text(Member::Description))
                    .col(text(Member::Characteristics).default("[]"))
                    .col(string(Member::CurrentStatus))
                    .col(string(Member::Role))
                    .col(string_null(Member::PhotoUrl))
                    .col(
                        timestamp_with_time_zone(Member::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Name,
    Nickname,
    Classification,
    Description,
    Characteristics,
    CurrentStatus,
    Role,
    PhotoUrl,
    CreatedAt,
}
