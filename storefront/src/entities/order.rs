use async_trait::async_trait;
use chrono::NaiveDate;
use crudkit::validation::{Validatable, ValidationError, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted values of `status`, in lifecycle order.
pub const ORDER_STATUSES: [&str; 5] = ["pending", "paid", "shipped", "delivered", "cancelled"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: String,
    pub order_date: Date,
    pub status: String,
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// An order placed by a customer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub order_date: NaiveDate,
    pub status: String,
    pub total: f64,
}

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            order_date: model.order_date,
            status: model.status,
            total: model.total,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub order_date: NaiveDate,
    #[schema(example = "pending")]
    pub status: String,
    pub total: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub customer_id: String,
    pub order_date: NaiveDate,
    #[schema(example = "shipped")]
    pub status: String,
    pub total: f64,
}

fn validate_fields(customer_id: &str, status: &str, total: f64) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("customerId", customer_id));
    if !ORDER_STATUSES.contains(&status) {
        errors.add(ValidationError::new(
            "status",
            format!("Must be one of: {}", ORDER_STATUSES.join(", ")),
        ));
    }
    errors.check(validators::validate_range("total", total, Some(0.0), None));
    errors.result()
}

impl Validatable for OrderCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.customer_id, &self.status, self.total)
    }
}

impl Validatable for OrderUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.customer_id, &self.status, self.total)
    }
}

impl IntoNewActiveModel<ActiveModel> for OrderCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            customer_id: Set(self.customer_id),
            order_date: Set(self.order_date),
            status: Set(self.status),
            total: Set(self.total),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for OrderUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.customer_id = Set(self.customer_id);
        existing.order_date = Set(self.order_date);
        existing.status = Set(self.status);
        existing.total = Set(self.total);
        existing
    }
}

#[async_trait]
impl CRUDResource for Order {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = OrderCreate;
    type UpdateModel = OrderUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::OrderDate;
    const RESOURCE_NAME_SINGULAR: &'static str = "order";
    const RESOURCE_NAME_PLURAL: &'static str = "orders";
    const TABLE_NAME: &'static str = "orders";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Status]
    }
}

crudkit::crud_handlers!(Order, OrderCreate, OrderUpdate);
crudkit::crud_lookup_handler!(
    get_by_customer_handler,
    Order,
    "/by-customer/{customer_id}",
    "customer_id",
    Column::CustomerId
);
crudkit::crud_router!(get_by_customer_handler);
