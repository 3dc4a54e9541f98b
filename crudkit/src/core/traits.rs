use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::errors::{ApiError, WriteAction};
use crate::filtering::{Page, PageParams, Pagination, build_search_condition, normalize_search_query};
use crate::ids::generate_id;
use crate::models::DeleteResult;
use crate::validation::Validatable;

/// Turns a create payload into an active model, given the server-assigned id.
pub trait IntoNewActiveModel<ActiveModelType> {
    fn into_new_active_model(self, id: String) -> ActiveModelType;
}

pub trait MergeIntoActiveModel<ActiveModelType> {
    /// Overwrite every mutable field of an existing active model
    fn merge_into_activemodel(self, existing: ActiveModelType) -> ActiveModelType;
}

/// Entity descriptor and data access operations.
///
/// Implementors name the table, the ordering column and the searchable
/// columns; every operation has a default implementation shared by all
/// entities. Expected failures are returned as [`ApiError`], never panics.
///
/// Operations accept any [`ConnectionTrait`], so callers can run several of
/// them inside one transaction.
///
/// Update and delete read the record first so a missing id is reported as
/// `NotFound` rather than as a write that touched zero rows. Lists run a
/// `COUNT(*)` and then the page query; under concurrent writes `total` may
/// disagree with the rows returned.
#[async_trait]
pub trait CRUDResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<String>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;
    type CreateModel: IntoNewActiveModel<Self::ActiveModelType> + Validatable + Send;
    type UpdateModel: MergeIntoActiveModel<Self::ActiveModelType> + Validatable + Send + Sync;

    const ID_COLUMN: Self::ColumnType;
    /// Fixed, human-readable column every list is ordered by (ascending).
    /// Ties are broken by `ID_COLUMN`.
    const ORDER_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;
    const TABLE_NAME: &'static str;

    /// Columns matched by `search`. Empty means the entity is not searchable.
    #[must_use]
    fn searchable_columns() -> Vec<Self::ColumnType> {
        vec![]
    }

    /// Count, then fetch one page of rows matching `condition`.
    ///
    /// A page that starts at or past `total` is returned empty without
    /// querying rows.
    ///
    /// # Errors
    ///
    /// `BadRequest` for out-of-range pagination, `InternalServerError` on
    /// storage failure.
    async fn paginate<C: ConnectionTrait>(
        db: &C,
        condition: Condition,
        params: PageParams,
    ) -> Result<Page<Self>, ApiError> {
        let request = params.validate()?;

        let total = PaginatorTrait::count(Self::EntityType::find().filter(condition.clone()), db)
            .await
            .map_err(|e| {
                ApiError::database(format!("Failed to count {}", Self::RESOURCE_NAME_PLURAL), e)
            })?;

        let pagination = Pagination::new(request, total);
        if request.offset() >= total {
            return Ok(Page::new(Vec::new(), pagination));
        }

        let models = Self::EntityType::find()
            .filter(condition)
            .order_by(Self::ORDER_COLUMN, Order::Asc)
            .order_by(Self::ID_COLUMN, Order::Asc)
            .offset(request.offset())
            .limit(request.limit)
            .all(db)
            .await
            .map_err(|e| {
                ApiError::database(format!("Failed to list {}", Self::RESOURCE_NAME_PLURAL), e)
            })?;

        Ok(Page::new(
            models.into_iter().map(Self::from).collect(),
            pagination,
        ))
    }

    /// # Errors
    ///
    /// `BadRequest` for out-of-range pagination, `InternalServerError` on
    /// storage failure.
    async fn get_all<C: ConnectionTrait>(db: &C, params: PageParams) -> Result<Page<Self>, ApiError> {
        Self::paginate(db, Condition::all(), params).await
    }

    /// List rows whose `column` equals `value`. No match is an empty page.
    ///
    /// # Errors
    ///
    /// Same as [`CRUDResource::get_all`].
    async fn get_all_by<C: ConnectionTrait>(
        db: &C,
        column: Self::ColumnType,
        value: &str,
        params: PageParams,
    ) -> Result<Page<Self>, ApiError> {
        Self::paginate(db, Condition::all().add(column.eq(value)), params).await
    }

    /// Case-insensitive substring search over `searchable_columns`.
    ///
    /// # Errors
    ///
    /// `BadRequest` for an empty query, out-of-range pagination or an entity
    /// without searchable columns; `InternalServerError` on storage failure.
    async fn search<C: ConnectionTrait>(
        db: &C,
        query: &str,
        params: PageParams,
    ) -> Result<Page<Self>, ApiError> {
        let query = normalize_search_query(query)?;
        let columns = Self::searchable_columns();
        if columns.is_empty() {
            return Err(ApiError::bad_request(format!(
                "{} do not support search",
                Self::RESOURCE_NAME_PLURAL
            )));
        }
        Self::paginate(db, build_search_condition(query, &columns), params).await
    }

    /// # Errors
    ///
    /// `NotFound` when no row has this id.
    async fn get_one<C: ConnectionTrait>(db: &C, id: &str) -> Result<Self, ApiError> {
        let model = Self::EntityType::find_by_id(id.to_owned())
            .one(db)
            .await
            .map_err(|e| {
                ApiError::database(format!("Failed to fetch {}", Self::RESOURCE_NAME_SINGULAR), e)
            })?
            .ok_or_else(|| ApiError::not_found(Self::RESOURCE_NAME_SINGULAR, Some(id.to_owned())))?;
        Ok(Self::from(model))
    }

    /// Insert a row with a freshly generated identifier.
    ///
    /// An identifier collision is reported as `Conflict`; it is not retried.
    ///
    /// # Errors
    ///
    /// `BadRequest` for invalid input or an unknown foreign key, `Conflict`
    /// on a unique violation, `InternalServerError` otherwise.
    async fn create<C: ConnectionTrait>(
        db: &C,
        create_model: Self::CreateModel,
    ) -> Result<Self, ApiError> {
        create_model.validate()?;

        let active_model = create_model.into_new_active_model(generate_id());
        let model = active_model.insert(db).await.map_err(|e| {
            ApiError::from_write_error(e, Self::RESOURCE_NAME_SINGULAR, WriteAction::Create)
        })?;

        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, "record created");
        Ok(Self::from(model))
    }

    /// Replace every mutable field of an existing row.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is unknown, `BadRequest` for invalid input or an
    /// unknown foreign key, `Conflict` on a unique violation,
    /// `InternalServerError` otherwise.
    async fn update<C: ConnectionTrait>(
        db: &C,
        id: &str,
        update_model: Self::UpdateModel,
    ) -> Result<Self, ApiError> {
        update_model.validate()?;

        let model = Self::EntityType::find_by_id(id.to_owned())
            .one(db)
            .await
            .map_err(|e| {
                ApiError::database(format!("Failed to fetch {}", Self::RESOURCE_NAME_SINGULAR), e)
            })?
            .ok_or_else(|| ApiError::not_found(Self::RESOURCE_NAME_SINGULAR, Some(id.to_owned())))?;

        let existing: Self::ActiveModelType = model.into_active_model();
        let updated = update_model
            .merge_into_activemodel(existing)
            .update(db)
            .await
            .map_err(|e| {
                ApiError::from_write_error(e, Self::RESOURCE_NAME_SINGULAR, WriteAction::Update)
            })?;

        tracing::debug!(resource = Self::RESOURCE_NAME_SINGULAR, id, "record updated");
        Ok(Self::from(updated))
    }

    /// Delete an existing row, returning how many rows were removed.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is unknown (nothing is deleted), `BadRequest`
    /// when other rows still reference it, `InternalServerError` otherwise.
    async fn delete<C: ConnectionTrait>(db: &C, id: &str) -> Result<DeleteResult, ApiError> {
        Self::get_one(db, id).await?;

        let result = Self::EntityType::delete_by_id(id.to_owned())
            .exec(db)
            .await
            .map_err(|e| {
                ApiError::from_write_error(e, Self::RESOURCE_NAME_SINGULAR, WriteAction::Delete)
            })?;

        tracing::debug!(
            resource = Self::RESOURCE_NAME_SINGULAR,
            id,
            changes = result.rows_affected,
            "record deleted"
        );
        Ok(DeleteResult {
            id: id.to_owned(),
            changes: result.rows_affected,
        })
    }
}
