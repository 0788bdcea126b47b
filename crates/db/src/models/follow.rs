//! Follow listing rows, items, and direction.

use marquee_core::error::CoreError;
use marquee_core::shaping::time_ago;
use marquee_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

use super::user::{UserItem, UserRow};

/// Which side of the follow relation to list for the target user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FollowDirection {
    /// Users the target follows.
    #[default]
    #[serde(rename = "siguiendo")]
    Following,
    /// Users following the target.
    #[serde(rename = "seguidores")]
    Followers,
}

impl FollowDirection {
    /// Parse a `tipo` value. Absent means [`FollowDirection::Following`].
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Self::Following),
            Some("siguiendo") | Some("following") => Ok(Self::Following),
            Some("seguidores") | Some("followers") => Ok(Self::Followers),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid tipo '{other}'. Must be 'siguiendo' or 'seguidores'"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Following => "siguiendo",
            Self::Followers => "seguidores",
        }
    }
}

/// A user on the other side of a follow, with when the follow happened.
#[derive(Debug, Clone, FromRow)]
pub struct FollowRow {
    pub followed_at: Timestamp,
    #[sqlx(flatten)]
    pub user: UserRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowItem {
    #[serde(flatten)]
    pub user: UserItem,
    pub followed_at: Timestamp,
    pub followed_ago: String,
}

impl FollowRow {
    pub fn into_item(self, now: Timestamp) -> FollowItem {
        FollowItem {
            followed_ago: time_ago(Some(self.followed_at), now),
            followed_at: self.followed_at,
            user: self.user.into_item(now),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FollowFilters {
    /// Substring of username or full name.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn direction_defaults_to_following() {
        assert_eq!(FollowDirection::parse(None).unwrap(), FollowDirection::Following);
        assert_eq!(FollowDirection::parse(Some("")).unwrap(), FollowDirection::Following);
    }

    #[test]
    fn direction_parses_both_sides() {
        assert_eq!(
            FollowDirection::parse(Some("seguidores")).unwrap(),
            FollowDirection::Followers
        );
        assert_eq!(
            FollowDirection::parse(Some("siguiendo")).unwrap(),
            FollowDirection::Following
        );
    }

    #[test]
    fn direction_rejects_unknown() {
        assert_matches!(
            FollowDirection::parse(Some("amigos")),
            Err(CoreError::Validation(_))
        );
    }
}
