use crudkit::{CRUDResource, ErrorKind, PageParams};
use storefront::entities::{
    Author, AuthorCreate, AuthorUpdate, Category, CategoryCreate, CategoryUpdate, Customer,
    CustomerUpdate, Product, ProductCreate,
};

mod common;
use common::{create_author, create_category, create_customer, setup_test_db};

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let created = Author::create(
        &db,
        AuthorCreate {
            name: "Octavia E. Butler".to_string(),
            email: Some("octavia@example.com".to_string()),
            bio: Some("Kindred, Parable of the Sower".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(!created.id.is_empty());
    assert!(created.id.len() <= 21);

    let fetched = Author::get_one(&db, &created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Octavia E. Butler");
    assert_eq!(fetched.email.as_deref(), Some("octavia@example.com"));
    assert_eq!(fetched.bio.as_deref(), Some("Kindred, Parable of the Sower"));
}

#[tokio::test]
async fn test_create_generates_distinct_ids() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let first = create_author(&db, "Same Name").await;
    let second = create_author(&db, "Same Name").await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let err = Author::get_one(&db, "does-not-exist").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.message().contains("does-not-exist"));
}

#[tokio::test]
async fn test_update_replaces_all_mutable_fields() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let author = Author::create(
        &db,
        AuthorCreate {
            name: "Before".to_string(),
            email: Some("before@example.com".to_string()),
            bio: Some("Old bio".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = Author::update(
        &db,
        &author.id,
        AuthorUpdate {
            name: "After".to_string(),
            email: None,
            bio: Some("New bio".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, author.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, None);
    assert_eq!(updated.bio.as_deref(), Some("New bio"));
    assert_eq!(Author::get_one(&db, &author.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_and_creates_nothing() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let err = Author::update(
        &db,
        "missing",
        AuthorUpdate {
            name: "Ghost".to_string(),
            email: None,
            bio: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let page = Author::get_all(&db, PageParams::default()).await.unwrap();
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn test_delete_reports_changes() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let author = create_author(&db, "Short-lived").await;

    let result = Author::delete(&db, &author.id).await.unwrap();
    assert_eq!(result.id, author.id);
    assert_eq!(result.changes, 1);

    let err = Author::get_one(&db, &author.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_author(&db, "Survivor").await;

    let err = Author::delete(&db, "missing").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let page = Author::get_all(&db, PageParams::default()).await.unwrap();
    assert_eq!(page.pagination.total, 1);
}

#[tokio::test]
async fn test_validation_rejects_before_touching_store() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let err = Product::create(
        &db,
        ProductCreate {
            name: "   ".to_string(),
            description: None,
            price: -1.0,
            stock: -5,
            category_id: None,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    let message = err.message();
    assert!(message.contains("name"));
    assert!(message.contains("price"));
    assert!(message.contains("stock"));

    let page = Product::get_all(&db, PageParams::default()).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_duplicate_unique_value_is_conflict() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_category(&db, "Poetry").await;

    let err = Category::create(
        &db,
        CategoryCreate {
            name: "Poetry".to_string(),
            description: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_update_into_existing_unique_value_is_conflict() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_customer(&db, "Alice", "alice@example.com").await;
    let bob = create_customer(&db, "Bob", "bob@example.com").await;

    let err = Customer::update(
        &db,
        &bob.id,
        CustomerUpdate {
            name: "Bob".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let unchanged = Customer::get_one(&db, &bob.id).await.unwrap();
    assert_eq!(unchanged.email, "bob@example.com");
}

#[tokio::test]
async fn test_update_keeps_own_unique_value() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let category = create_category(&db, "Travel").await;

    let updated = Category::update(
        &db,
        &category.id,
        CategoryUpdate {
            name: "Travel".to_string(),
            description: Some("Guides and memoirs".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.description.as_deref(), Some("Guides and memoirs"));
}
