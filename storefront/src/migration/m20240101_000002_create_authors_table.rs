use sea_orm_migration::prelude::*;

use super::id_column;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20240101_000002_create_authors_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(id_column(Authors::Id))
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .col(ColumnDef::new(Authors::Email).string().null())
                    .col(ColumnDef::new(Authors::Bio).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_authors_name")
                    .table(Authors::Table)
                    .col(Authors::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Authors {
    Table,
    Id,
    Name,
    Email,
    Bio,
}
