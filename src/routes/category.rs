//! This file defines the route handlers for managing categories.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    auth::Claims,
    models::{Category, CategoryName, DatabaseID, TransactionType},
    routes::Ack,
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CategoryData {
    /// The name of the new category.
    pub name: Option<String>,
    /// The type of transaction the new category applies to.
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

/// Create a category for the authenticated user.
pub async fn create_category<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
    Json(data): Json<CategoryData>,
) -> Result<Json<Category>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let name = CategoryName::new(data.name.as_deref().unwrap_or_default())?;
    let kind = data.kind.ok_or(Error::MissingField("type"))?;

    let category = state.category_store.create(claims.sub, name, kind, false)?;

    Ok(Json(category))
}

/// Get the authenticated user's categories in creation order.
pub async fn get_categories<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    claims: Claims,
) -> Result<Json<Vec<Category>>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let categories = state.category_store.get_by_user(claims.sub)?;

    Ok(Json(categories))
}

/// Delete one of the authenticated user's categories along with its
/// transactions. Default categories cannot be deleted.
pub async fn delete_category<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
    Path(category_id): Path<DatabaseID>,
) -> Result<Json<Ack>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    state.category_store.delete(category_id, claims.sub)?;

    Ok(Json(Ack::default()))
}
