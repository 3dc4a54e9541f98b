//! Schema migrations, applied in order and recorded in `seaql_migrations`.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories_table;
mod m20240101_000002_create_authors_table;
mod m20240101_000003_create_books_table;
mod m20240101_000004_create_customers_table;
mod m20240101_000005_create_products_table;
mod m20240101_000006_create_orders_table;
mod m20240101_000007_create_order_details_table;

/// Identifier columns hold nanoid strings of this length.
const ID_LENGTH: u32 = 21;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories_table::Migration),
            Box::new(m20240101_000002_create_authors_table::Migration),
            Box::new(m20240101_000003_create_books_table::Migration),
            Box::new(m20240101_000004_create_customers_table::Migration),
            Box::new(m20240101_000005_create_products_table::Migration),
            Box::new(m20240101_000006_create_orders_table::Migration),
            Box::new(m20240101_000007_create_order_details_table::Migration),
        ]
    }
}

fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .string_len(ID_LENGTH)
        .not_null()
        .primary_key()
        .to_owned()
}

fn reference_column<T: IntoIden>(name: T, nullable: bool) -> ColumnDef {
    let mut column = ColumnDef::new(name);
    column.string_len(ID_LENGTH);
    if nullable {
        column.null();
    } else {
        column.not_null();
    }
    column
}

/// Foreign keys restrict deletion of the referenced row and never cascade.
fn restrict_reference(
    name: &str,
    from: (impl IntoIden + 'static, impl IntoIden + 'static),
    to: (impl IntoIden + 'static, impl IntoIden + 'static),
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(from.0, from.1)
        .to(to.0, to.1)
        .on_delete(ForeignKeyAction::Restrict)
        .on_update(ForeignKeyAction::Restrict)
        .to_owned()
}
