//! Pure functions for deriving filtered and aggregated views of a user's
//! transactions.
//!
//! Everything in this module operates on in-memory snapshots and performs no
//! I/O, so the route handlers stay thin and the logic is easy to test.

pub use filter::FilterConfig;
pub use period::{summarize_by_category, totals, CategorySummary, Period, Totals};
pub use series::{daily_series, DailyPoint, SERIES_DAYS};

mod filter;
mod period;
mod series;
