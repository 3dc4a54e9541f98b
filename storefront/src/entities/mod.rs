//! The storefront entities, each instantiated on the `crudkit` engine.

use sea_orm::DatabaseConnection;
use utoipa_axum::router::OpenApiRouter;

pub mod author;
pub mod book;
pub mod category;
pub mod customer;
pub mod order;
pub mod order_detail;
pub mod product;

pub use author::{Author, AuthorCreate, AuthorUpdate};
pub use book::{Book, BookCreate, BookUpdate};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use order::{Order, OrderCreate, OrderUpdate};
pub use order_detail::{OrderDetail, OrderDetailCreate, OrderDetailUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};

/// Every entity router, nested under `/api/<plural>`.
pub fn router(db: &DatabaseConnection) -> OpenApiRouter {
    OpenApiRouter::new()
        .nest("/api/authors", author::router(db))
        .nest("/api/categories", category::router(db))
        .nest("/api/books", book::router(db))
        .nest("/api/customers", customer::router(db))
        .nest("/api/products", product::router(db))
        .nest("/api/orders", order::router(db))
        .nest("/api/order-details", order_detail::router(db))
}
