//! Filter, shuffle and truncate pipeline shared by every catalog service.

use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::Catalog;

pub mod predicate;
pub mod selector;

pub use predicate::{Predicate, PredicateBuilder};
pub use selector::{select, NoMatches};

/// Number of records returned when the caller gives no limit
pub const DEFAULT_LIMIT: u32 = 5;

/// Accepted range for the `limit` query parameter
pub const LIMIT_RANGE: RangeInclusive<u32> = 1..=20;

/// Query parameters of one catalog service
///
/// Implementors describe which dataset they search, how their parameters are
/// validated and how they turn into a [`Predicate`]. [`run_query`] does the rest.
pub trait CatalogQuery: DeserializeOwned + Debug + Send + 'static {
    type Record: Clone + Serialize + Send + Sync + 'static;

    /// Plural noun used in log lines
    const ITEMS: &'static str;

    /// Detail returned when nothing matches
    const NOT_FOUND: &'static str;

    /// Dataset searched by this query
    fn records(catalog: &Catalog) -> &[Self::Record];

    /// Requested limit, if any
    fn limit(&self) -> Option<u32>;

    /// Range checks on service-specific parameters
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }

    fn predicate(&self) -> Predicate<Self::Record>;
}

/// Validates the query, filters the catalog and returns a random sample
pub fn run_query<Q, G>(catalog: &Catalog, query: &Q, rng: &mut G) -> AppResult<Vec<Q::Record>>
where
    Q: CatalogQuery,
    G: Rng + ?Sized,
{
    let limit = resolve_limit(query.limit())?;
    query.validate()?;

    let predicate = query.predicate();
    let selected = match select(Q::records(catalog), &predicate, limit, rng) {
        Ok(selected) => selected,
        Err(NoMatches) => {
            tracing::warn!(
                items = Q::ITEMS,
                constraints = predicate.len(),
                "No matching {} found",
                Q::ITEMS
            );
            return Err(AppError::NotFound(Q::NOT_FOUND.to_string()));
        }
    };

    tracing::info!(
        items = Q::ITEMS,
        returned = selected.len(),
        "Returning {}",
        Q::ITEMS
    );

    Ok(selected)
}

/// Applies the default and checks the accepted range
pub fn resolve_limit(limit: Option<u32>) -> AppResult<usize> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    ensure_in_range("limit", Some(limit), LIMIT_RANGE)?;
    Ok(limit as usize)
}

/// Rejects a present value that falls outside `range`
pub fn ensure_in_range<T>(
    name: &str,
    value: Option<T>,
    range: RangeInclusive<T>,
) -> AppResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    match value {
        Some(value) if !range.contains(&value) => Err(AppError::Validation(format!(
            "{} must be between {} and {}, got {}",
            name,
            range.start(),
            range.end(),
            value
        ))),
        _ => Ok(()),
    }
}
