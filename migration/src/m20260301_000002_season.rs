use sea_orm_migration::{prelude::*, schema::*};

static IDX_SEASON_CATEGORY: &str = "idx-season-category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(string_len(Season::Name, 50))
                    .col(string_len(Season::Category, 20).default("senior_boys"))
                    .col(date(Season::StartDate))
                    .col(date_null(Season::EndDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEASON_CATEGORY)
                    .table(Season::Table)
                    .col(Season::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEASON_CATEGORY)
                    .table(Season::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    Name,
    Category,
    StartDate,
    EndDate,
}
