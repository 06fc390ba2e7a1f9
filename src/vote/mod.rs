pub mod db;

use std::fmt;

pub use db::VoteDb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteKind {
    Good,
    Bad,
}

impl VoteKind {
    /// Value stored in the `kind` column.
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "good" => Some(Self::Good),
            "bad" => Some(Self::Bad),
            _ => None,
        }
    }

    /// Parses the `/vote` argument.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "good" | "좋아요" | "+" | "👍" => Some(Self::Good),
            "bad" | "싫어요" | "-" | "👎" => Some(Self::Bad),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Good => "👍",
            Self::Bad => "👎",
        }
    }
}

impl fmt::Display for VoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "좋아요"),
            Self::Bad => write!(f, "싫어요"),
        }
    }
}

/// Time window for stats and leaderboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    All,
    HalfMonth,
    Month,
    Quarter,
}

impl Period {
    /// Parses the `period` argument of `/stats` and `/leaderboard`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "all" | "전체" => Some(Self::All),
            "15" => Some(Self::HalfMonth),
            "30" => Some(Self::Month),
            "90" => Some(Self::Quarter),
            _ => None,
        }
    }

    pub fn days(&self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::HalfMonth => Some(15),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
        }
    }

    /// Modifier for SQLite's `datetime('now', ?)`.
    pub(crate) fn sqlite_modifier(&self) -> Option<String> {
        self.days().map(|d| format!("-{d} days"))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            None => write!(f, "전체 기간"),
            Some(d) => write!(f, "최근 {d}일"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteStats {
    pub good: u32,
    pub bad: u32,
}

impl VoteStats {
    pub fn total(&self) -> u32 {
        self.good + self.bad
    }

    /// Share of good votes in percent, `None` without votes.
    pub fn good_ratio(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(f64::from(self.good) / f64::from(total) * 100.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub target_id: u64,
    pub stats: VoteStats,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VoteRecord {
    pub target_id: u64,
    pub kind: VoteKind,
    pub created_at: String,
}

pub const MAX_LEADERBOARD: u32 = 20;
pub const DEFAULT_LEADERBOARD: u32 = 10;

pub fn clamp_leaderboard_limit(limit: i64) -> u32 {
    if limit > i64::from(MAX_LEADERBOARD) {
        MAX_LEADERBOARD
    } else if limit < 1 {
        DEFAULT_LEADERBOARD
    } else {
        limit as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_leaderboard_limit() {
        assert_eq!(clamp_leaderboard_limit(0), 10);
        assert_eq!(clamp_leaderboard_limit(-3), 10);
        assert_eq!(clamp_leaderboard_limit(5), 5);
        assert_eq!(clamp_leaderboard_limit(20), 20);
        assert_eq!(clamp_leaderboard_limit(99), 20);
    }

    #[test]
    fn test_vote_kind_db_roundtrip() {
        assert_eq!(VoteKind::from_db(VoteKind::Good.as_db()), Some(VoteKind::Good));
        assert_eq!(VoteKind::from_db("meh"), None);
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(VoteKind::parse(" Good "), Some(VoteKind::Good));
        assert_eq!(VoteKind::parse("싫어요"), Some(VoteKind::Bad));
        assert_eq!(VoteKind::parse("maybe"), None);
        assert_eq!(Period::parse("all"), Some(Period::All));
        assert_eq!(Period::parse("15"), Some(Period::HalfMonth));
        assert_eq!(Period::parse("7"), None);
    }

    #[test]
    fn test_good_ratio() {
        assert_eq!(VoteStats::default().good_ratio(), None);
        let s = VoteStats { good: 3, bad: 1 };
        assert_eq!(s.total(), 4);
        assert!((s.good_ratio().unwrap() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::All.to_string(), "전체 기간");
        assert_eq!(Period::Month.to_string(), "최근 30일");
        assert_eq!(Period::Quarter.sqlite_modifier().as_deref(), Some("-90 days"));
    }
}
