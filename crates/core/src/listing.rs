//! Listing plans: one predicate set, two statements.
//!
//! A [`ListingPlan`] owns exactly one [`PredicateSet`] and renders both the
//! windowed page statement and the count statement from it. The count
//! statement is `COUNT(DISTINCT <primary id>)` over the same `FROM` and
//! `WHERE` text, without stats, ordering, or window, so `total` is the size
//! of the set the page is sliced from.

use crate::aggregate::AggregationSpec;
use crate::pagination::PageRequest;
use crate::predicate::PredicateSet;
use crate::sort::{SortColumns, SortKey};

/// Static description of a listable entity.
#[derive(Debug, Clone, Copy)]
pub struct ListingSource {
    /// Entity name used in logs.
    pub entity: &'static str,
    /// Plain select-list columns (no stats).
    pub columns: &'static str,
    /// `FROM` body including any inner joins to required parents.
    pub from: &'static str,
    /// Primary id expression, e.g. `m.id`.
    pub primary_id: &'static str,
    pub stats: AggregationSpec,
    pub sort: SortColumns,
}

/// A fully specified listing request against one [`ListingSource`].
#[derive(Debug, Clone)]
pub struct ListingPlan {
    source: ListingSource,
    predicates: PredicateSet,
    sort: SortKey,
    page: PageRequest,
}

impl ListingPlan {
    pub fn new(
        source: ListingSource,
        predicates: PredicateSet,
        sort: SortKey,
        page: PageRequest,
    ) -> Self {
        Self {
            source,
            predicates,
            sort: source.sort.resolve(sort),
            page,
        }
    }

    pub fn source(&self) -> &ListingSource {
        &self.source
    }

    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    /// The sort key actually applied (after degrading unsupported keys).
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// `SELECT COUNT(DISTINCT id) FROM .. WHERE ..`; binds predicate values only.
    pub fn count_sql(&self) -> String {
        let rendered = self.predicates.render(1);
        format!(
            "SELECT COUNT(DISTINCT {id})::BIGINT FROM {from} {where_clause}",
            id = self.source.primary_id,
            from = self.source.from,
            where_clause = rendered.where_clause,
        )
        .trim_end()
        .to_string()
    }

    /// Windowed statement; binds predicate values, then `LIMIT`, then `OFFSET`.
    pub fn page_sql(&self) -> String {
        let rendered = self.predicates.render(1);
        let limit_param = rendered.next_param;
        let offset_param = limit_param + 1;

        let select_list = if self.source.stats.is_empty() {
            self.source.columns.to_string()
        } else {
            format!("{}, {}", self.source.columns, self.source.stats.select_list())
        };

        let mut sql = format!("SELECT {select_list} FROM {}", self.source.from);
        if !rendered.where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&rendered.where_clause);
        }
        sql.push(' ');
        sql.push_str(&self.source.sort.order_by(self.sort));
        sql.push_str(&format!(" LIMIT ${limit_param} OFFSET ${offset_param}"));
        sql
    }
}
