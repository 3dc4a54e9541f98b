use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A product for sale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<String>,
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock: model.stock,
            category_id: model.category_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    pub category_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: Option<String>,
}

fn validate_fields(
    name: &str,
    price: f64,
    stock: i32,
    category_id: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("name", name));
    errors.check(validators::validate_length("name", name, None, Some(200)));
    errors.check(validators::validate_range("price", price, Some(0.0), None));
    errors.check(validators::validate_range("stock", stock, Some(0), None));
    errors.check(validators::validate_optional_required("categoryId", category_id));
    errors.result()
}

impl Validatable for ProductCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, self.price, self.stock, self.category_id.as_deref())
    }
}

impl Validatable for ProductUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, self.price, self.stock, self.category_id.as_deref())
    }
}

impl IntoNewActiveModel<ActiveModel> for ProductCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            stock: Set(self.stock),
            category_id: Set(self.category_id),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for ProductUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.name = Set(self.name);
        existing.description = Set(self.description);
        existing.price = Set(self.price);
        existing.stock = Set(self.stock);
        existing.category_id = Set(self.category_id);
        existing
    }
}

#[async_trait]
impl CRUDResource for Product {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = ProductCreate;
    type UpdateModel = ProductUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::Name;
    const RESOURCE_NAME_SINGULAR: &'static str = "product";
    const RESOURCE_NAME_PLURAL: &'static str = "products";
    const TABLE_NAME: &'static str = "products";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Name, Column::Description]
    }
}

crudkit::crud_handlers!(Product, ProductCreate, ProductUpdate);
crudkit::crud_lookup_handler!(
    get_by_category_handler,
    Product,
    "/by-category/{category_id}",
    "category_id",
    Column::CategoryId
);
crudkit::crud_router!(get_by_category_handler);
