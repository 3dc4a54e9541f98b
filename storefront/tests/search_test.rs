use crudkit::{CRUDResource, ErrorKind, PageParams};
use storefront::entities::{Author, AuthorCreate, Book, OrderDetail};

mod common;
use common::{create_author, create_book, setup_test_db};

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_author(&db, "Terry Pratchett").await;
    create_author(&db, "Neil Gaiman").await;
    create_author(&db, "Terry Goodkind").await;

    let page = Author::search(&db, "tErRy", PageParams::default()).await.unwrap();

    assert_eq!(page.pagination.total, 2);
    let names: Vec<&str> = page.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Terry Goodkind", "Terry Pratchett"]);
}

#[tokio::test]
async fn test_search_finds_non_ascii_names() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_author(&db, "José Saramago").await;
    create_author(&db, "Émile Zola").await;
    create_author(&db, "Jose Rizal").await;

    for query in ["José", "josé", "jOSé sARAMAGO", "é Sar"] {
        let page = Author::search(&db, query, PageParams::default()).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"José Saramago"), "{query:?} returned {names:?}");
        assert!(!names.contains(&"Jose Rizal"), "{query:?} returned {names:?}");
    }

    for query in ["Émile", "Émile ZOLA", "zola"] {
        let page = Author::search(&db, query, PageParams::default()).await.unwrap();
        assert_eq!(page.pagination.total, 1, "{query:?}");
        assert_eq!(page.items[0].name, "Émile Zola");
    }
}

#[tokio::test]
async fn test_search_matches_any_searchable_column() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    Author::create(
        &db,
        AuthorCreate {
            name: "Mary Shelley".to_string(),
            email: None,
            bio: Some("Wrote Frankenstein in 1818".to_string()),
        },
    )
    .await
    .unwrap();
    create_author(&db, "Bram Stoker").await;

    let page = Author::search(&db, "frankenstein", PageParams::default()).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Mary Shelley");
}

#[tokio::test]
async fn test_search_without_matches_is_empty_page() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_author(&db, "Italo Calvino").await;

    let page = Author::search(&db, "zzz", PageParams::default()).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert!(!page.pagination.has_next);
}

#[tokio::test]
async fn test_empty_or_blank_query_is_bad_request() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    for query in ["", "   "] {
        let err = Author::search(&db, query, PageParams::default()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}

#[tokio::test]
async fn test_like_wildcards_match_literally() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    create_author(&db, "100% Pure").await;
    create_author(&db, "1000 Pure").await;
    create_author(&db, "snake_case").await;
    create_author(&db, "snakeXcase").await;

    let percent = Author::search(&db, "100%", PageParams::default()).await.unwrap();
    assert_eq!(percent.pagination.total, 1);
    assert_eq!(percent.items[0].name, "100% Pure");

    let underscore = Author::search(&db, "e_c", PageParams::default()).await.unwrap();
    assert_eq!(underscore.pagination.total, 1);
    assert_eq!(underscore.items[0].name, "snake_case");

    create_author(&db, "Yahoo! Answers").await;
    create_author(&db, "Yahoo Answers").await;
    let bang = Author::search(&db, "o! a", PageParams::default()).await.unwrap();
    assert_eq!(bang.pagination.total, 1);
    assert_eq!(bang.items[0].name, "Yahoo! Answers");
}

#[tokio::test]
async fn test_search_is_paginated() {
    let db = setup_test_db().await.expect("Failed to setup test database");
    let author = create_author(&db, "Prolific").await;
    for i in 0..12 {
        create_book(&db, &format!("Volume {i:02}"), &author.id).await;
    }
    create_book(&db, "Unrelated", &author.id).await;

    let page = Book::search(&db, "volume", PageParams::new(2, 5)).await.unwrap();
    assert_eq!(page.pagination.total, 12);
    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].title, "Volume 05");
}

#[tokio::test]
async fn test_entity_without_searchable_columns_rejects_search() {
    let db = setup_test_db().await.expect("Failed to setup test database");

    let err = OrderDetail::search(&db, "anything", PageParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert!(err.message().contains("do not support search"));
}
