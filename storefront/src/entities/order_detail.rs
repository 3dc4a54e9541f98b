use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub line_number: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// One line of an order. Order details are not searchable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub line_number: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

impl From<Model> for OrderDetail {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            line_number: model.line_number,
            quantity: model.quantity,
            unit_price: model.unit_price,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailCreate {
    pub order_id: String,
    pub product_id: String,
    pub line_number: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailUpdate {
    pub order_id: String,
    pub product_id: String,
    pub line_number: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

fn validate_fields(
    order_id: &str,
    product_id: &str,
    line_number: i32,
    quantity: i32,
    unit_price: f64,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("orderId", order_id));
    errors.check(validators::validate_required("productId", product_id));
    errors.check(validators::validate_range("lineNumber", line_number, Some(1), None));
    errors.check(validators::validate_range("quantity", quantity, Some(1), None));
    errors.check(validators::validate_range("unitPrice", unit_price, Some(0.0), None));
    errors.result()
}

impl Validatable for OrderDetailCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(
            &self.order_id,
            &self.product_id,
            self.line_number,
            self.quantity,
            self.unit_price,
        )
    }
}

impl Validatable for OrderDetailUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(
            &self.order_id,
            &self.product_id,
            self.line_number,
            self.quantity,
            self.unit_price,
        )
    }
}

impl IntoNewActiveModel<ActiveModel> for OrderDetailCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            order_id: Set(self.order_id),
            product_id: Set(self.product_id),
            line_number: Set(self.line_number),
            quantity: Set(self.quantity),
            unit_price: Set(self.unit_price),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for OrderDetailUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.order_id = Set(self.order_id);
        existing.product_id = Set(self.product_id);
        existing.line_number = Set(self.line_number);
        existing.quantity = Set(self.quantity);
        existing.unit_price = Set(self.unit_price);
        existing
    }
}

#[async_trait]
impl CRUDResource for OrderDetail {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = OrderDetailCreate;
    type UpdateModel = OrderDetailUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::LineNumber;
    const RESOURCE_NAME_SINGULAR: &'static str = "order detail";
    const RESOURCE_NAME_PLURAL: &'static str = "order details";
    const TABLE_NAME: &'static str = "order_details";
}

crudkit::crud_handlers!(OrderDetail, OrderDetailCreate, OrderDetailUpdate);
crudkit::crud_lookup_handler!(
    get_by_order_handler,
    OrderDetail,
    "/by-order/{order_id}",
    "order_id",
    Column::OrderId
);
crudkit::crud_lookup_handler!(
    get_by_product_handler,
    OrderDetail,
    "/by-product/{product_id}",
    "product_id",
    Column::ProductId
);
crudkit::crud_router!(get_by_order_handler, get_by_product_handler);
