use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A customer placing orders. E-mail addresses are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

fn validate_fields(name: &str, email: &str, phone: Option<&str>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("name", name));
    errors.check(validators::validate_length("name", name, None, Some(200)));
    errors.check(validators::validate_email("email", email));
    if let Some(phone) = phone {
        errors.check(validators::validate_length("phone", phone, None, Some(32)));
    }
    errors.result()
}

impl Validatable for CustomerCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, &self.email, self.phone.as_deref())
    }
}

impl Validatable for CustomerUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, &self.email, self.phone.as_deref())
    }
}

impl IntoNewActiveModel<ActiveModel> for CustomerCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            address: Set(self.address),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for CustomerUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.name = Set(self.name);
        existing.email = Set(self.email);
        existing.phone = Set(self.phone);
        existing.address = Set(self.address);
        existing
    }
}

#[async_trait]
impl CRUDResource for Customer {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = CustomerCreate;
    type UpdateModel = CustomerUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::Name;
    const RESOURCE_NAME_SINGULAR: &'static str = "customer";
    const RESOURCE_NAME_PLURAL: &'static str = "customers";
    const TABLE_NAME: &'static str = "customers";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Name, Column::Email]
    }
}

crudkit::crud_handlers!(Customer, CustomerCreate, CustomerUpdate);
crudkit::crud_router!();
