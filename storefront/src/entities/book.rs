use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A book in the catalog, written by one author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: f64,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author_id: model.author_id,
            category_id: model.category_id,
            isbn: model.isbn,
            published_year: model.published_year,
            price: model.price,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCreate {
    pub title: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: String,
    pub author_id: String,
    pub category_id: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: f64,
}

struct BookFields<'a> {
    title: &'a str,
    author_id: &'a str,
    category_id: Option<&'a str>,
    isbn: Option<&'a str>,
    published_year: Option<i32>,
    price: f64,
}

impl BookFields<'_> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::validate_required("title", self.title));
        errors.check(validators::validate_length("title", self.title, None, Some(300)));
        errors.check(validators::validate_required("authorId", self.author_id));
        errors.check(validators::validate_optional_required("categoryId", self.category_id));
        if let Some(isbn) = self.isbn {
            errors.check(validators::validate_length("isbn", isbn, Some(10), Some(17)));
        }
        if let Some(year) = self.published_year {
            errors.check(validators::validate_range("publishedYear", year, Some(0), Some(9999)));
        }
        errors.check(validators::validate_range("price", self.price, Some(0.0), None));
        errors.result()
    }
}

impl Validatable for BookCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        BookFields {
            title: &self.title,
            author_id: &self.author_id,
            category_id: self.category_id.as_deref(),
            isbn: self.isbn.as_deref(),
            published_year: self.published_year,
            price: self.price,
        }
        .validate()
    }
}

impl Validatable for BookUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        BookFields {
            title: &self.title,
            author_id: &self.author_id,
            category_id: self.category_id.as_deref(),
            isbn: self.isbn.as_deref(),
            published_year: self.published_year,
            price: self.price,
        }
        .validate()
    }
}

impl IntoNewActiveModel<ActiveModel> for BookCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            title: Set(self.title),
            author_id: Set(self.author_id),
            category_id: Set(self.category_id),
            isbn: Set(self.isbn),
            published_year: Set(self.published_year),
            price: Set(self.price),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for BookUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.title = Set(self.title);
        existing.author_id = Set(self.author_id);
        existing.category_id = Set(self.category_id);
        existing.isbn = Set(self.isbn);
        existing.published_year = Set(self.published_year);
        existing.price = Set(self.price);
        existing
    }
}

#[async_trait]
impl CRUDResource for Book {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = BookCreate;
    type UpdateModel = BookUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::Title;
    const RESOURCE_NAME_SINGULAR: &'static str = "book";
    const RESOURCE_NAME_PLURAL: &'static str = "books";
    const TABLE_NAME: &'static str = "books";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Title, Column::Isbn]
    }
}

crudkit::crud_handlers!(Book, BookCreate, BookUpdate);
crudkit::crud_lookup_handler!(
    get_by_author_handler,
    Book,
    "/by-author/{author_id}",
    "author_id",
    Column::AuthorId
);
crudkit::crud_lookup_handler!(
    get_by_category_handler,
    Book,
    "/by-category/{category_id}",
    "category_id",
    Column::CategoryId
);
crudkit::crud_router!(get_by_author_handler, get_by_category_handler);
