use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_categories_table::Categories;
use super::m20240101_000002_create_authors_table::Authors;
use super::{id_column, reference_column, restrict_reference};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20240101_000003_create_books_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(id_column(Books::Id))
                    .col(ColumnDef::new(Books::Title).string().not_null())
                    .col(reference_column(Books::AuthorId, false))
                    .col(reference_column(Books::CategoryId, true))
                    .col(ColumnDef::new(Books::Isbn).string_len(17).null())
                    .col(ColumnDef::new(Books::PublishedYear).integer().null())
                    .col(ColumnDef::new(Books::Price).double().not_null())
                    .foreign_key(&mut restrict_reference(
                        "fk_books_author_id",
                        (Books::Table, Books::AuthorId),
                        (Authors::Table, Authors::Id),
                    ))
                    .foreign_key(&mut restrict_reference(
                        "fk_books_category_id",
                        (Books::Table, Books::CategoryId),
                        (Categories::Table, Categories::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_books_title", Books::Title),
            ("idx_books_author_id", Books::AuthorId),
            ("idx_books_category_id", Books::CategoryId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Books::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Books {
    Table,
    Id,
    Title,
    AuthorId,
    CategoryId,
    Isbn,
    PublishedYear,
    Price,
}
