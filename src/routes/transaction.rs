//! This file defines the route handlers for recording and listing
//! transactions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    analytics::FilterConfig,
    auth::Claims,
    models::{DatabaseID, NewTransaction, Transaction, TransactionType},
    routes::{required_field, Ack},
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The filter query parameters for listing transactions.
///
/// Every field arrives as an opaque string and is parsed on its own, so one
/// bad value cannot disable the other filters. A value that does not parse,
/// or the literal `all`, imposes no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Keep transactions of this type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Keep transactions belonging to the category with this ID.
    pub category: Option<String>,
    /// Keep transactions dated on or after this date.
    pub start_date: Option<String>,
    /// Keep transactions dated on or before this date.
    pub end_date: Option<String>,
    /// Keep transactions whose title contains this string, ignoring case.
    pub search: Option<String>,
    /// Keep transactions with an amount of at least this value.
    pub min_amount: Option<String>,
}

impl FilterParams {
    fn into_config(self) -> FilterConfig {
        FilterConfig {
            kind: self.kind.as_deref().and_then(|value| value.parse().ok()),
            category: self.category.as_deref().and_then(|value| value.parse().ok()),
            start_date: self.start_date.as_deref().and_then(|value| value.parse().ok()),
            end_date: self.end_date.as_deref().and_then(|value| value.parse().ok()),
            search: self.search,
            min_amount: self.min_amount.as_deref().and_then(|value| value.parse().ok()),
        }
    }
}

/// The request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionData {
    /// A short description of the transaction.
    pub title: Option<String>,
    /// The amount of money, must be positive.
    pub amount: Option<f64>,
    /// The calendar date the transaction occurred on.
    pub spent_on: Option<NaiveDate>,
    /// The ID of the category the transaction belongs to.
    pub category_id: Option<DatabaseID>,
    /// Whether the transaction is an expense, income, or plan.
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

/// Create a transaction for the authenticated user.
///
/// The category must belong to the user and have the same type as the
/// transaction.
pub async fn create_transaction<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let title = required_field(data.title, "title")?;
    let amount = data.amount.ok_or(Error::MissingField("amount"))?;
    let date = data.spent_on.ok_or(Error::MissingField("spent_on"))?;
    let category_id = data.category_id.ok_or(Error::MissingField("category_id"))?;
    let kind = data.kind.ok_or(Error::MissingField("type"))?;

    // The negated comparison also rejects NaN.
    if !(amount > 0.0) || !amount.is_finite() {
        return Err(Error::InvalidAmount);
    }

    let category = state.category_store.get(category_id)?;

    if category.user_id != claims.sub {
        return Err(Error::NotFound);
    }

    if category.kind != kind {
        return Err(Error::CategoryTypeMismatch);
    }

    let transaction = state.transaction_store.create(NewTransaction {
        user_id: claims.sub,
        category_id,
        title,
        amount,
        date,
        kind,
    })?;

    Ok(Json(transaction))
}

/// Get the authenticated user's transactions, newest first, filtered by any
/// query parameters that are present.
///
/// Absent or unparseable query parameters impose no constraint.
pub async fn get_transactions<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    claims: Claims,
    params: Option<Query<FilterParams>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let Query(params) = params.unwrap_or_default();
    let filters = params.into_config();

    let transactions = state.transaction_store.get_by_user(claims.sub)?;

    Ok(Json(filters.apply(&transactions)))
}

/// Delete one of the authenticated user's transactions.
pub async fn delete_transaction<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
    Path(transaction_id): Path<DatabaseID>,
) -> Result<Json<Ack>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    state.transaction_store.delete(transaction_id, claims.sub)?;

    Ok(Json(Ack::default()))
}

/// Delete all of the authenticated user's transactions.
pub async fn clear_transactions<C, T, U>(
    State(mut state): State<AppState<C, T, U>>,
    claims: Claims,
) -> Result<Json<Ack>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    state.transaction_store.delete_by_user(claims.sub)?;

    Ok(Json(Ack::default()))
}
