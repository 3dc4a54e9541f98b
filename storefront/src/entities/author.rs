use async_trait::async_trait;
use crudkit::validation::{Validatable, ValidationErrors, validators};
use crudkit::{CRUDResource, IntoNewActiveModel, MergeIntoActiveModel};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A book author
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            bio: model.bio,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCreate {
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdate {
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
}

fn validate_fields(name: &str, email: Option<&str>, bio: Option<&str>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(validators::validate_required("name", name));
    errors.check(validators::validate_length("name", name, None, Some(200)));
    if let Some(email) = email {
        errors.check(validators::validate_email("email", email));
    }
    if let Some(bio) = bio {
        errors.check(validators::validate_length("bio", bio, None, Some(5_000)));
    }
    errors.result()
}

impl Validatable for AuthorCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, self.email.as_deref(), self.bio.as_deref())
    }
}

impl Validatable for AuthorUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.name, self.email.as_deref(), self.bio.as_deref())
    }
}

impl IntoNewActiveModel<ActiveModel> for AuthorCreate {
    fn into_new_active_model(self, id: String) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            email: Set(self.email),
            bio: Set(self.bio),
        }
    }
}

impl MergeIntoActiveModel<ActiveModel> for AuthorUpdate {
    fn merge_into_activemodel(self, mut existing: ActiveModel) -> ActiveModel {
        existing.name = Set(self.name);
        existing.email = Set(self.email);
        existing.bio = Set(self.bio);
        existing
    }
}

#[async_trait]
impl CRUDResource for Author {
    type EntityType = Entity;
    type ColumnType = Column;
    type ActiveModelType = ActiveModel;
    type CreateModel = AuthorCreate;
    type UpdateModel = AuthorUpdate;

    const ID_COLUMN: Self::ColumnType = Column::Id;
    const ORDER_COLUMN: Self::ColumnType = Column::Name;
    const RESOURCE_NAME_SINGULAR: &'static str = "author";
    const RESOURCE_NAME_PLURAL: &'static str = "authors";
    const TABLE_NAME: &'static str = "authors";

    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![Column::Name, Column::Bio]
    }
}

crudkit::crud_handlers!(Author, AuthorCreate, AuthorUpdate);
crudkit::crud_router!();
