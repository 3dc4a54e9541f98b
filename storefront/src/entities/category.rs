use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A product or book category. Names are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
    pub description: Option<String>,
}

fn validate_fields(name: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("name", name));
    errors.check(validators::validate_length("name", name, None, Some(100)));
    errors.result()
}

impl Validatable for CategoryCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name)
    }
}

impl Validatable for CategoryUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name)
    }
}

impl IntoNewActiveModel<ActiveModel> for CategoryCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            description: Set(self.description),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for CategoryUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.name = Set(self.name);
        existing.description = Set(self.description);
        existing
    }
}

#[async_trait]
impl CRUDResource for Category {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = CategoryCreate;
    type UpdateModel = CategoryUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::Name;
    const RESOURCE_NAME_SINGULAR: &'static str = "category";
    const RESOURCE_NAME_PLURAL: &'static str = "categories";
    const TABLE_NAME: &'static str = "categories";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Name, Column::Description]
    }
}

crudkit::crud_handlers!(Category, CategoryCreate, CategoryUpdate);
crudkit::crud_router!();
