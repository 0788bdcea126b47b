//! Conjunctive predicate sets with positional bind values.
//!
//! A [`PredicateSet`] is an ordered list of `(clause, value)` pairs. Absent
//! filters add nothing, so a `None` never turns into a `col = NULL` test.
//! Rendering assigns `$n` placeholders in clause order, and [`values`]
//! yields the bind values in that same order, so any statement rendered from
//! one set can be bound from the same set.
//!
//! [`values`]: PredicateSet::values

use crate::types::DbId;

/// Token inside a clause template that is replaced by the clause's `$n`.
const PARAM: &str = "{p}";

/// A value bound to a rendered predicate placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    sql: String,
    value: Option<BindValue>,
}

/// A `WHERE` clause rendered from a [`PredicateSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPredicates {
    /// `WHERE a AND b`, or an empty string when the set is empty.
    pub where_clause: String,
    /// The next free placeholder index after this clause.
    pub next_param: usize,
}

/// Ordered, conjunctive filter clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    clauses: Vec<Clause>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `alias.active = TRUE` (soft-deleted rows are invisible).
    pub fn active(self, alias: &str) -> Self {
        self.push(format!("{alias}.active = TRUE"), None)
    }

    /// `column = id` when an id is given; nothing otherwise.
    pub fn id_eq(self, column: &str, id: Option<DbId>) -> Self {
        match id {
            Some(id) => self.push(format!("{column} = {PARAM}"), Some(BindValue::BigInt(id))),
            None => self,
        }
    }

    /// Case-insensitive substring match of `term` against any of `columns`.
    ///
    /// The columns are OR-ed inside a single clause that binds the pattern
    /// once. A missing term, or an empty column list, adds nothing.
    pub fn text_contains(self, columns: &[&str], term: Option<&str>) -> Self {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return self;
        };
        if columns.is_empty() {
            return self;
        }
        let ors: Vec<String> = columns
            .iter()
            .map(|c| format!("{c} ILIKE {PARAM}"))
            .collect();
        self.push(
            format!("({})", ors.join(" OR ")),
            Some(BindValue::Text(contains_pattern(term))),
        )
    }

    fn push(mut self, sql: String, value: Option<BindValue>) -> Self {
        self.clauses.push(Clause { sql, value });
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Bind values in placeholder order.
    pub fn values(&self) -> impl Iterator<Item = &BindValue> {
        self.clauses.iter().filter_map(|c| c.value.as_ref())
    }

    /// Render the `WHERE` clause with placeholders starting at `$first_param`.
    pub fn render(&self, first_param: usize) -> RenderedPredicates {
        let mut next_param = first_param;
        let mut parts = Vec::with_capacity(self.clauses.len());

        for clause in &self.clauses {
            if clause.value.is_some() {
                parts.push(clause.sql.replace(PARAM, &format!("${next_param}")));
                next_param += 1;
            } else {
                parts.push(clause.sql.clone());
            }
        }

        let where_clause = if parts.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", parts.join(" AND "))
        };

        RenderedPredicates {
            where_clause,
            next_param,
        }
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `%term%` with metacharacters escaped.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// `term%` with metacharacters escaped.
pub fn prefix_pattern(term: &str) -> String {
    format!("{}%", escape_like(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filters_add_nothing() {
        let set = PredicateSet::new()
            .id_eq("m.genre_id", None)
            .text_contains(&["m.title"], None)
            .text_contains(&["m.title"], Some("   "));
        assert!(set.is_empty());
        assert_eq!(set.render(1).where_clause, "");
    }

    #[test]
    fn clauses_render_in_order_with_sequential_params() {
        let set = PredicateSet::new()
            .active("m")
            .id_eq("m.genre_id", Some(3))
            .text_contains(&["m.title", "m.director"], Some("nolan"));

        let rendered = set.render(1);
        assert_eq!(
            rendered.where_clause,
            "WHERE m.active = TRUE AND m.genre_id = $1 \
             AND (m.title ILIKE $2 OR m.director ILIKE $2)"
        );
        assert_eq!(rendered.next_param, 3);

        let values: Vec<_> = set.values().cloned().collect();
        assert_eq!(
            values,
            vec![
                BindValue::BigInt(3),
                BindValue::Text("%nolan%".to_string())
            ]
        );
    }

    #[test]
    fn render_respects_first_param_offset() {
        let set = PredicateSet::new().id_eq("f.user_id", Some(9));
        let rendered = set.render(4);
        assert_eq!(rendered.where_clause, "WHERE f.user_id = $4");
        assert_eq!(rendered.next_param, 5);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let set = PredicateSet::new()
            .active("u")
            .text_contains(&["u.username"], Some("ann"));
        assert_eq!(set.render(1), set.render(1));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(prefix_pattern("the_"), "the\\_%");
    }

    #[test]
    fn search_term_is_trimmed_before_binding() {
        let set = PredicateSet::new().text_contains(&["g.name"], Some("  drama "));
        let values: Vec<_> = set.values().cloned().collect();
        assert_eq!(values, vec![BindValue::Text("%drama%".to_string())]);
    }
}
