//! Sample catalog inserted through the regular create path.

use chrono::NaiveDate;
use crudkit::{ApiError, CRUDResource, PageParams};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::entities::{
    Author, AuthorCreate, Book, BookCreate, Category, CategoryCreate, Customer, CustomerCreate,
    Order, OrderCreate, OrderDetail, OrderDetailCreate, Product, ProductCreate,
};

/// Rows inserted per table by [`seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub authors: usize,
    pub books: usize,
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub order_details: usize,
}

impl SeedReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.categories
            + self.authors
            + self.books
            + self.customers
            + self.products
            + self.orders
            + self.order_details
            == 0
    }
}

async fn has_rows<C: ConnectionTrait>(db: &C) -> Result<bool, ApiError> {
    let first = PageParams::new(1, 1);
    let totals = [
        Category::get_all(db, first).await?.pagination.total,
        Author::get_all(db, first).await?.pagination.total,
        Book::get_all(db, first).await?.pagination.total,
        Customer::get_all(db, first).await?.pagination.total,
        Product::get_all(db, first).await?.pagination.total,
        Order::get_all(db, first).await?.pagination.total,
        OrderDetail::get_all(db, first).await?.pagination.total,
    ];
    Ok(totals.iter().any(|&total| total > 0))
}

/// Insert the sample catalog in a single transaction. Nothing is inserted
/// when any of the tables already holds rows, so running it twice is safe.
/// A failing create rolls back every row inserted before it.
///
/// # Errors
///
/// Propagates the first failing create, or a failure to begin or commit the
/// transaction.
pub async fn seed(db: &DatabaseConnection) -> Result<SeedReport, ApiError> {
    let txn = db
        .begin()
        .await
        .map_err(|e| ApiError::database("Failed to begin seed transaction", e))?;

    if has_rows(&txn).await? {
        tracing::info!("database already holds data, skipping seed");
        return Ok(SeedReport::default());
    }

    let report = insert_catalog(&txn).await?;

    txn.commit()
        .await
        .map_err(|e| ApiError::database("Failed to commit seed transaction", e))?;

    tracing::info!(?report, "seeded sample catalog");
    Ok(report)
}

async fn insert_catalog<C: ConnectionTrait>(db: &C) -> Result<SeedReport, ApiError> {
    let mut report = SeedReport::default();

    let fiction = Category::create(
        db,
        CategoryCreate {
            name: "Fiction".into(),
            description: Some("Novels and short stories".into()),
        },
    )
    .await?;
    let science = Category::create(
        db,
        CategoryCreate {
            name: "Science".into(),
            description: Some("Popular science and textbooks".into()),
        },
    )
    .await?;
    let stationery = Category::create(
        db,
        CategoryCreate {
            name: "Stationery".into(),
            description: None,
        },
    )
    .await?;
    report.categories = 3;

    let le_guin = Author::create(
        db,
        AuthorCreate {
            name: "Ursula K. Le Guin".into(),
            email: None,
            bio: Some("Author of the Earthsea cycle and the Hainish novels".into()),
        },
    )
    .await?;
    let sagan = Author::create(
        db,
        AuthorCreate {
            name: "Carl Sagan".into(),
            email: None,
            bio: Some("Astronomer and science writer".into()),
        },
    )
    .await?;
    report.authors = 2;

    let books = [
        ("A Wizard of Earthsea", &le_guin.id, &fiction.id, "9780547773742", 1968, 9.99),
        ("The Left Hand of Darkness", &le_guin.id, &fiction.id, "9780441478125", 1969, 11.50),
        ("Cosmos", &sagan.id, &science.id, "9780345539434", 1980, 14.00),
    ];
    for (title, author_id, category_id, isbn, year, price) in books {
        Book::create(
            db,
            BookCreate {
                title: title.into(),
                author_id: author_id.clone(),
                category_id: Some(category_id.clone()),
                isbn: Some(isbn.into()),
                published_year: Some(year),
                price,
            },
        )
        .await?;
        report.books += 1;
    }

    let customer = Customer::create(
        db,
        CustomerCreate {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: Some("+44 20 7946 0000".into()),
            address: Some("12 St James's Square, London".into()),
        },
    )
    .await?;
    report.customers = 1;

    let notebook = Product::create(
        db,
        ProductCreate {
            name: "Dotted notebook".into(),
            description: Some("A5, 120 pages".into()),
            price: 6.50,
            stock: 40,
            category_id: Some(stationery.id.clone()),
        },
    )
    .await?;
    let pen = Product::create(
        db,
        ProductCreate {
            name: "Fountain pen".into(),
            description: None,
            price: 24.00,
            stock: 12,
            category_id: Some(stationery.id),
        },
    )
    .await?;
    report.products = 2;

    let lines = [(&notebook, 2), (&pen, 1)];
    let total = lines
        .iter()
        .map(|(product, quantity)| product.price * f64::from(*quantity))
        .sum();
    let order = Order::create(
        db,
        OrderCreate {
            customer_id: customer.id,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap_or_default(),
            status: "paid".into(),
            total,
        },
    )
    .await?;
    report.orders = 1;

    for (line_number, (product, quantity)) in (1..).zip(lines) {
        OrderDetail::create(
            db,
            OrderDetailCreate {
                order_id: order.id.clone(),
                product_id: product.id.clone(),
                line_number,
                quantity,
                unit_price: product.price,
            },
        )
        .await?;
        report.order_details += 1;
    }

    Ok(report)
}
