//! Per-row statistics over one-to-many child relations.
//!
//! Every [`Stat`] renders as its own correlated subselect keyed on the
//! primary row's id. No child relation is ever joined into the primary row
//! set, so summarizing reviews and favorites together cannot multiply rows.
//! Counts use `COUNT(DISTINCT child.id)`, and every stat is wrapped in
//! `COALESCE(.., 0)` so a parent without active children reads `0`, never
//! `NULL`.

/// Aggregate function applied to the child relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFn {
    /// `COUNT(DISTINCT <alias>.id)`, cast to `BIGINT`.
    Count,
    /// `AVG(<column>)` rounded to one decimal, cast to `FLOAT8`.
    Avg(&'static str),
}

/// One summarized child relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Output column name.
    pub name: &'static str,
    pub func: StatFn,
    /// Child table with alias, e.g. `reviews r`.
    pub table: &'static str,
    /// Child alias, used for the `id` and `active` columns.
    pub alias: &'static str,
    /// Child column holding the parent's id, e.g. `r.movie_id`.
    pub link: &'static str,
    /// Optional gate join, e.g. only count reviews of active movies.
    pub gate: Option<&'static str>,
}

impl Stat {
    pub const fn count(
        name: &'static str,
        table: &'static str,
        alias: &'static str,
        link: &'static str,
    ) -> Self {
        Self {
            name,
            func: StatFn::Count,
            table,
            alias,
            link,
            gate: None,
        }
    }

    pub const fn avg(
        name: &'static str,
        column: &'static str,
        table: &'static str,
        alias: &'static str,
        link: &'static str,
    ) -> Self {
        Self {
            name,
            func: StatFn::Avg(column),
            table,
            alias,
            link,
            gate: None,
        }
    }

    /// Restrict the child rows through an inner join.
    pub const fn gated(self, gate: &'static str) -> Self {
        Self {
            gate: Some(gate),
            ..self
        }
    }

    /// Render `COALESCE((SELECT ..), 0)::TYPE AS name` for a parent id expression.
    pub fn render(&self, parent_id: &str) -> String {
        let (func, cast) = match self.func {
            StatFn::Count => (format!("COUNT(DISTINCT {}.id)", self.alias), "BIGINT"),
            StatFn::Avg(column) => (format!("ROUND(AVG({column})::NUMERIC, 1)"), "FLOAT8"),
        };
        let gate = self.gate.map(|g| format!(" {g}")).unwrap_or_default();
        format!(
            "COALESCE((SELECT {func} FROM {table}{gate} \
             WHERE {link} = {parent_id} AND {alias}.active = TRUE), 0)::{cast} AS {name}",
            table = self.table,
            link = self.link,
            alias = self.alias,
            name = self.name,
        )
    }
}

/// The statistics attached to one primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationSpec {
    /// Primary id expression, e.g. `m.id`.
    pub parent_id: &'static str,
    pub stats: &'static [Stat],
}

impl AggregationSpec {
    /// Render every stat as a select-list fragment (`, `-joined).
    pub fn select_list(&self) -> String {
        self.stats
            .iter()
            .map(|s| s.render(self.parent_id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Stat definitions shared by listings and search
// ---------------------------------------------------------------------------

/// Movie: average score, review count, favorite count. Only reviews and
/// favorites of active users count.
pub const MOVIE_STATS: AggregationSpec = AggregationSpec {
    parent_id: "m.id",
    stats: &[
        Stat::avg("average_rating", "r.score", "reviews r", "r", "r.movie_id").gated(
            "JOIN users ra ON ra.id = r.user_id AND ra.active = TRUE",
        ),
        Stat::count("review_count", "reviews r", "r", "r.movie_id").gated(
            "JOIN users ra ON ra.id = r.user_id AND ra.active = TRUE",
        ),
        Stat::count("favorite_count", "favorites f", "f", "f.movie_id").gated(
            "JOIN users fa ON fa.id = f.user_id AND fa.active = TRUE",
        ),
    ],
};

/// User: movies created (in active genres), reviews written (of active
/// movies), active followers and followed users.
pub const USER_STATS: AggregationSpec = AggregationSpec {
    parent_id: "u.id",
    stats: &[
        Stat::count("movie_count", "movies mv", "mv", "mv.creator_user_id").gated(
            "JOIN genres mvg ON mvg.id = mv.genre_id AND mvg.active = TRUE",
        ),
        Stat::count("review_count", "reviews rv", "rv", "rv.user_id").gated(
            "JOIN movies rvm ON rvm.id = rv.movie_id AND rvm.active = TRUE",
        ),
        Stat::count("follower_count", "follows fl", "fl", "fl.followed_id").gated(
            "JOIN users fu ON fu.id = fl.follower_id AND fu.active = TRUE",
        ),
        Stat::count("following_count", "follows fg", "fg", "fg.follower_id").gated(
            "JOIN users gu ON gu.id = fg.followed_id AND gu.active = TRUE",
        ),
    ],
};

/// Genre: active movies, average score over active users' reviews of
/// active movies.
pub const GENRE_STATS: AggregationSpec = AggregationSpec {
    parent_id: "g.id",
    stats: &[
        Stat::count("movie_count", "movies gm", "gm", "gm.genre_id"),
        Stat::avg("average_rating", "gr.score", "reviews gr", "gr", "grm.genre_id").gated(
            "JOIN movies grm ON grm.id = gr.movie_id AND grm.active = TRUE \
             JOIN users gra ON gra.id = gr.user_id AND gra.active = TRUE",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_only_count_children_visible_in_their_listings() {
        let movie = MOVIE_STATS.select_list();
        assert_eq!(movie.matches("AND ra.active = TRUE").count(), 2);
        assert!(movie.contains("JOIN users fa ON fa.id = f.user_id AND fa.active = TRUE"));

        let user = USER_STATS.select_list();
        assert!(user.contains("FROM movies mv JOIN genres mvg"));
        assert!(user.contains("FROM reviews rv JOIN movies rvm"));
    }

    #[test]
    fn count_renders_distinct_and_coalesce() {
        let stat = Stat::count("review_count", "reviews r", "r", "r.movie_id");
        assert_eq!(
            stat.render("m.id"),
            "COALESCE((SELECT COUNT(DISTINCT r.id) FROM reviews r \
             WHERE r.movie_id = m.id AND r.active = TRUE), 0)::BIGINT AS review_count"
        );
    }

    #[test]
    fn avg_defaults_to_zero() {
        let stat = Stat::avg("average_rating", "r.score", "reviews r", "r", "r.movie_id");
        let sql = stat.render("m.id");
        assert!(sql.starts_with("COALESCE((SELECT ROUND(AVG(r.score)::NUMERIC, 1)"));
        assert!(sql.ends_with("), 0)::FLOAT8 AS average_rating"));
    }

    #[test]
    fn gate_join_is_placed_before_where() {
        let sql = USER_STATS.stats[1].render("u.id");
        assert!(sql.contains(
            "FROM reviews rv JOIN movies rvm ON rvm.id = rv.movie_id AND rvm.active = TRUE WHERE"
        ));
        assert!(sql.contains("rv.user_id = u.id"));

        let sql = GENRE_STATS.stats[1].render("g.id");
        assert!(sql.contains(
            "grm.active = TRUE JOIN users gra ON gra.id = gr.user_id AND gra.active = TRUE WHERE"
        ));
    }

    #[test]
    fn every_stat_is_an_independent_subselect() {
        for spec in [MOVIE_STATS, USER_STATS, GENRE_STATS] {
            let list = spec.select_list();
            assert_eq!(list.matches("COALESCE((SELECT").count(), spec.stats.len());
            assert!(!list.contains("GROUP BY"));
        }
    }

    #[test]
    fn movie_stats_select_list_names() {
        let list = MOVIE_STATS.select_list();
        for name in ["average_rating", "review_count", "favorite_count"] {
            assert!(list.contains(&format!("AS {name}")), "missing {name}");
        }
    }
}
