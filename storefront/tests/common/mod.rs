#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use crudkit::CRUDResource;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use storefront::entities::{
    Author, AuthorCreate, Book, BookCreate, Category, CategoryCreate, Customer, CustomerCreate,
};
use storefront::{Migrator, db, server};
use tower::ServiceExt;

/// A fresh, migrated database: `DATABASE_URL` when set, in-memory SQLite
/// otherwise.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db = db::connect(&database_url).await?;

    Migrator::fresh(&db).await?;

    Ok(db)
}

pub fn setup_test_app(db: &DatabaseConnection) -> Router {
    server::app(db)
}

pub async fn create_author(db: &DatabaseConnection, name: &str) -> Author {
    Author::create(
        db,
        AuthorCreate {
            name: name.to_string(),
            email: None,
            bio: None,
        },
    )
    .await
    .expect("Failed to create author")
}

pub async fn create_category(db: &DatabaseConnection, name: &str) -> Category {
    Category::create(
        db,
        CategoryCreate {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("Failed to create category")
}

pub async fn create_customer(db: &DatabaseConnection, name: &str, email: &str) -> Customer {
    Customer::create(
        db,
        CustomerCreate {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            address: None,
        },
    )
    .await
    .expect("Failed to create customer")
}

pub fn book_create(title: &str, author_id: &str) -> BookCreate {
    BookCreate {
        title: title.to_string(),
        author_id: author_id.to_string(),
        category_id: None,
        isbn: None,
        published_year: None,
        price: 10.0,
    }
}

pub async fn create_book(db: &DatabaseConnection, title: &str, author_id: &str) -> Book {
    Book::create(db, book_create(title, author_id))
        .await
        .expect("Failed to create book")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Status and JSON body of a response.
pub async fn status_and_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    (status, body_json(response).await)
}
