//! This file defines the route handlers for the read-only analytics views.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    analytics::{daily_series, summarize_by_category, totals, CategorySummary, DailyPoint, Period, Totals},
    auth::Claims,
    stores::{CategoryStore, TransactionStore, UserStore},
    AppState, Error,
};

/// The query parameters for the summary route.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    /// The period to summarize over. Defaults to all time.
    pub period: Option<Period>,
}

/// The response body for the summary route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    /// The per-type totals over the period.
    pub totals: Totals,
    /// The per-category sums over the period, largest first.
    pub categories: Vec<CategorySummary>,
}

/// Summarize the authenticated user's transactions over a period.
pub async fn get_summary<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    claims: Claims,
    params: Option<Query<SummaryParams>>,
) -> Result<Json<SummaryResponse>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let Query(params) = params.unwrap_or_default();
    let period = params.period.unwrap_or_default();
    let today = Utc::now().date_naive();

    let transactions = state.transaction_store.get_by_user(claims.sub)?;
    let categories = state.category_store.get_by_user(claims.sub)?;

    let in_period = match period.start(today) {
        Some(start) => transactions
            .iter()
            .filter(|transaction| transaction.date >= start)
            .cloned()
            .collect(),
        None => transactions.clone(),
    };

    Ok(Json(SummaryResponse {
        totals: totals(&in_period),
        categories: summarize_by_category(&transactions, &categories, period, today),
    }))
}

/// Get the sums per transaction type for each of the last seven days.
pub async fn get_daily_series<C, T, U>(
    State(state): State<AppState<C, T, U>>,
    claims: Claims,
) -> Result<Json<Vec<DailyPoint>>, Error>
where
    C: CategoryStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.get_by_user(claims.sub)?;
    let today = Utc::now().date_naive();

    Ok(Json(daily_series(&transactions, today)))
}
