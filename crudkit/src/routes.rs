//! Route binding: Axum handlers over [`CRUDResource`](crate::CRUDResource).
//!
//! Handlers are plain functions generated per entity so that each one can
//! carry its own `utoipa::path` documentation. They forward to the entity's
//! data access operations and return [`ApiError`](crate::ApiError) on
//! failure, which maps to the transport status code.
//!
//! The calling crate must depend on `axum`, `hyper`, `sea-orm`, `utoipa`,
//! `utoipa-axum` and `crudkit`.
//!
//! ```rust,ignore
//! crudkit::crud_handlers!(Book, BookCreate, BookUpdate);
//! crudkit::crud_lookup_handler!(get_by_author_handler, Book, "/by-author/{author_id}", "author_id", Column::AuthorId);
//! crudkit::crud_router!(get_by_author_handler);
//! ```

/// Generate create/get/list/search/update/delete handlers for a resource.
///
/// Brings [`Page`](crate::Page) into the calling module; the generated
/// OpenAPI schemas name it without a path.
#[macro_export]
macro_rules! crud_handlers {
    ($resource:ty, $create_model:ty, $update_model:ty) => {
        use $crate::Page;

        #[utoipa::path(
            get,
            path = "/{id}",
            params(("id" = String, Path, description = "Record identifier")),
            responses(
                (status = axum::http::StatusCode::OK, description = "The requested record", body = $resource),
                (status = axum::http::StatusCode::NOT_FOUND, description = "Record not found"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn get_one_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            path: Result<axum::extract::Path<String>, axum::extract::rejection::PathRejection>,
        ) -> Result<axum::Json<$resource>, $crate::ApiError> {
            let axum::extract::Path(id) = path?;
            <$resource as $crate::CRUDResource>::get_one(&db, &id)
                .await
                .map(axum::Json)
        }

        #[utoipa::path(
            get,
            path = "/",
            params(crudkit::ListQuery),
            responses(
                (status = axum::http::StatusCode::OK, description = "One page of records", body = Page<$resource>),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Invalid pagination"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn get_all_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            query: Result<axum::extract::Query<$crate::ListQuery>, axum::extract::rejection::QueryRejection>,
        ) -> Result<(hyper::HeaderMap, axum::Json<$crate::Page<$resource>>), $crate::ApiError> {
            let axum::extract::Query(params) = query?;
            let page = <$resource as $crate::CRUDResource>::get_all(&db, params).await?;
            let headers = $crate::filtering::calculate_content_range(
                &page.pagination,
                <$resource as $crate::CRUDResource>::TABLE_NAME,
            );
            Ok((headers, axum::Json(page)))
        }

        #[utoipa::path(
            get,
            path = "/search",
            params(crudkit::SearchQuery),
            responses(
                (status = axum::http::StatusCode::OK, description = "One page of matching records", body = Page<$resource>),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Empty query or invalid pagination"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn search_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            query: Result<axum::extract::Query<$crate::SearchQuery>, axum::extract::rejection::QueryRejection>,
        ) -> Result<(hyper::HeaderMap, axum::Json<$crate::Page<$resource>>), $crate::ApiError> {
            let axum::extract::Query(search) = query?;
            let page = <$resource as $crate::CRUDResource>::search(
                &db,
                &search.query,
                search.page_params(),
            )
            .await?;
            let headers = $crate::filtering::calculate_content_range(
                &page.pagination,
                <$resource as $crate::CRUDResource>::TABLE_NAME,
            );
            Ok((headers, axum::Json(page)))
        }

        #[utoipa::path(
            post,
            path = "/",
            request_body = $create_model,
            responses(
                (status = axum::http::StatusCode::CREATED, description = "Record created", body = $resource),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Invalid payload or reference"),
                (status = axum::http::StatusCode::CONFLICT, description = "Duplicate record"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn create_one_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            json: Result<axum::Json<$create_model>, axum::extract::rejection::JsonRejection>,
        ) -> Result<(axum::http::StatusCode, axum::Json<$resource>), $crate::ApiError> {
            let axum::Json(payload) = json?;
            <$resource as $crate::CRUDResource>::create(&db, payload)
                .await
                .map(|created| (axum::http::StatusCode::CREATED, axum::Json(created)))
        }

        #[utoipa::path(
            put,
            path = "/{id}",
            params(("id" = String, Path, description = "Record identifier")),
            request_body = $update_model,
            responses(
                (status = axum::http::StatusCode::OK, description = "Record updated", body = $resource),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Invalid payload or reference"),
                (status = axum::http::StatusCode::NOT_FOUND, description = "Record not found"),
                (status = axum::http::StatusCode::CONFLICT, description = "Duplicate record"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn update_one_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            path: Result<axum::extract::Path<String>, axum::extract::rejection::PathRejection>,
            json: Result<axum::Json<$update_model>, axum::extract::rejection::JsonRejection>,
        ) -> Result<axum::Json<$resource>, $crate::ApiError> {
            let axum::extract::Path(id) = path?;
            let axum::Json(payload) = json?;
            <$resource as $crate::CRUDResource>::update(&db, &id, payload)
                .await
                .map(axum::Json)
        }

        #[utoipa::path(
            delete,
            path = "/{id}",
            params(("id" = String, Path, description = "Record identifier")),
            responses(
                (status = axum::http::StatusCode::OK, description = "Record deleted", body = crudkit::DeleteResult),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Record still referenced"),
                (status = axum::http::StatusCode::NOT_FOUND, description = "Record not found"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn delete_one_handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            path: Result<axum::extract::Path<String>, axum::extract::rejection::PathRejection>,
        ) -> Result<axum::Json<$crate::DeleteResult>, $crate::ApiError> {
            let axum::extract::Path(id) = path?;
            <$resource as $crate::CRUDResource>::delete(&db, &id)
                .await
                .map(axum::Json)
        }
    };
}

/// Generate a paginated lookup-by-foreign-key handler.
///
/// `$path` must contain exactly one path parameter, named `$param`. Invoke
/// it in a module that also invokes [`crud_handlers!`], which imports `Page`.
#[macro_export]
macro_rules! crud_lookup_handler {
    ($handler:ident, $resource:ty, $path:literal, $param:literal, $column:expr) => {
        #[utoipa::path(
            get,
            path = $path,
            params(
                ($param = String, Path, description = "Identifier of the referenced record"),
                crudkit::ListQuery
            ),
            responses(
                (status = axum::http::StatusCode::OK, description = "One page of records", body = Page<$resource>),
                (status = axum::http::StatusCode::BAD_REQUEST, description = "Invalid pagination"),
                (status = axum::http::StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
            )
        )]
        pub async fn $handler(
            axum::extract::State(db): axum::extract::State<sea_orm::DatabaseConnection>,
            path: Result<axum::extract::Path<String>, axum::extract::rejection::PathRejection>,
            query: Result<axum::extract::Query<$crate::ListQuery>, axum::extract::rejection::QueryRejection>,
        ) -> Result<(hyper::HeaderMap, axum::Json<$crate::Page<$resource>>), $crate::ApiError> {
            let axum::extract::Path(value) = path?;
            let axum::extract::Query(params) = query?;
            let page =
                <$resource as $crate::CRUDResource>::get_all_by(&db, $column, &value, params).await?;
            let headers = $crate::filtering::calculate_content_range(
                &page.pagination,
                <$resource as $crate::CRUDResource>::TABLE_NAME,
            );
            Ok((headers, axum::Json(page)))
        }
    };
}

/// Generate `router(db)` mounting the handlers from [`crud_handlers!`] plus
/// any extra lookup handlers.
#[macro_export]
macro_rules! crud_router {
    ($($extra_handler:ident),* $(,)?) => {
        pub fn router(db: &sea_orm::DatabaseConnection) -> utoipa_axum::router::OpenApiRouter {
            use utoipa_axum::{router::OpenApiRouter, routes};

            OpenApiRouter::new()
                .routes(routes!(get_all_handler, create_one_handler))
                .routes(routes!(search_handler))
                .routes(routes!(get_one_handler, update_one_handler, delete_one_handler))
                $(
                    .routes(routes!($extra_handler))
                )*
                .with_state(db.clone())
        }
    };
}
