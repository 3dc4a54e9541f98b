use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_products_table::Products;
use super::m20240101_000006_create_orders_table::Orders;
use super::{id_column, reference_column, restrict_reference};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &'static str {
        "m20240101_000007_create_order_details_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetails::Table)
                    .if_not_exists()
                    .col(id_column(OrderDetails::Id))
                    .col(reference_column(OrderDetails::OrderId, false))
                    .col(reference_column(OrderDetails::ProductId, false))
                    .col(ColumnDef::new(OrderDetails::LineNumber).integer().not_null())
                    .col(ColumnDef::new(OrderDetails::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderDetails::UnitPrice).double().not_null())
                    .foreign_key(&mut restrict_reference(
                        "fk_order_details_order_id",
                        (OrderDetails::Table, OrderDetails::OrderId),
                        (Orders::Table, Orders::Id),
                    ))
                    .foreign_key(&mut restrict_reference(
                        "fk_order_details_product_id",
                        (OrderDetails::Table, OrderDetails::ProductId),
                        (Products::Table, Products::Id),
                    ))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_order_details_order_id", OrderDetails::OrderId),
            ("idx_order_details_product_id", OrderDetails::ProductId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(OrderDetails::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrderDetails {
    Table,
    Id,
    OrderId,
    ProductId,
    LineNumber,
    Quantity,
    UnitPrice,
}
