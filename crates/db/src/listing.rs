//! Executes [`ListingPlan`]s against the pool.
//!
//! The count statement runs first; when it reports zero rows the windowed
//! statement is skipped. Both statements are bound from the plan's single
//! predicate set. They are two independent round trips without a
//! transaction, so a concurrent write between them can leave `total` briefly
//! out of step with `items`.

use marquee_core::listing::ListingPlan;
use marquee_core::pagination::Page;
use marquee_core::predicate::{BindValue, PredicateSet};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Postgres};

/// Runs listing plans.
pub struct ListingEngine;

impl ListingEngine {
    /// Execute `plan`, returning one page plus the unwindowed total.
    pub async fn list<T>(pool: &PgPool, plan: &ListingPlan) -> Result<Page<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let total = Self::count(pool, plan).await?;
        let window = plan.page();

        if total == 0 {
            return Ok(Page::empty(window));
        }

        let sql = plan.page_sql();
        let items = bind_query_as(sqlx::query_as::<_, T>(&sql), plan.predicates())
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    entity = plan.source().entity,
                    statement = "page",
                    sort = plan.sort().as_str(),
                    error = %e,
                    "Listing query failed",
                );
            })?;

        tracing::debug!(
            entity = plan.source().entity,
            total,
            returned = items.len(),
            page = window.page,
            limit = window.limit,
            "Listing executed",
        );

        Ok(Page {
            items,
            total,
            page: window.page,
            limit: window.limit,
        })
    }

    /// Number of rows matched by the plan's predicates, before windowing.
    pub async fn count(pool: &PgPool, plan: &ListingPlan) -> Result<i64, sqlx::Error> {
        let sql = plan.count_sql();
        bind_query_scalar(sqlx::query_scalar::<_, i64>(&sql), plan.predicates())
            .fetch_one(pool)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    entity = plan.source().entity,
                    statement = "count",
                    error = %e,
                    "Listing query failed",
                );
            })
    }
}

/// Bind a predicate set's values to a sqlx `QueryAs`.
pub(crate) fn bind_query_as<'q, O>(
    mut q: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    predicates: &'q PredicateSet,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments> {
    for val in predicates.values() {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a predicate set's values to a sqlx `QueryScalar`.
pub(crate) fn bind_query_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, Postgres, i64, PgArguments>,
    predicates: &'q PredicateSet,
) -> sqlx::query::QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in predicates.values() {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}
