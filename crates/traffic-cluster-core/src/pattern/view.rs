//! Pattern view selection and per-view vector dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClusterError;

/// Daily pattern: one value per hour of the day.
pub const DAILY_LEN: usize = 24;

/// Weekly pattern: one value per ten-hour-ish slot across the week.
pub const WEEKLY_LEN: usize = 70;

/// Combined pattern: daily fields first, weekly fields second.
pub const COMBINED_LEN: usize = DAILY_LEN + WEEKLY_LEN;

/// Which activity-pattern view to operate on.
///
/// View selection is always explicit; there is no ambient "currently
/// selected pattern" state anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternView {
    /// 24-hour activity profile.
    Daily,
    /// 70-slot weekly activity profile.
    Weekly,
    /// Daily followed by weekly, concatenated in that order.
    Combined,
}

impl PatternView {
    /// All views, in declaration order.
    pub const ALL: [PatternView; 3] = [Self::Daily, Self::Weekly, Self::Combined];

    /// The fixed vector length for this view.
    ///
    /// Every vector stored under the view has exactly this length.
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Self::Daily => DAILY_LEN,
            Self::Weekly => WEEKLY_LEN,
            Self::Combined => COMBINED_LEN,
        }
    }

    /// Canonical lowercase name of the view.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for PatternView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternView {
    type Err = ClusterError;

    /// Parse a view name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidView`] for unrecognized names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "combined" => Ok(Self::Combined),
            _ => Err(ClusterError::InvalidView {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_lengths() {
        assert_eq!(PatternView::Daily.len(), 24);
        assert_eq!(PatternView::Weekly.len(), 70);
        assert_eq!(PatternView::Combined.len(), 94);
    }

    #[test]
    fn parse_known_views() {
        assert_eq!("daily".parse::<PatternView>().unwrap(), PatternView::Daily);
        assert_eq!(
            "Weekly".parse::<PatternView>().unwrap(),
            PatternView::Weekly
        );
        assert_eq!(
            " combined ".parse::<PatternView>().unwrap(),
            PatternView::Combined
        );
    }

    #[test]
    fn parse_unknown_view_fails() {
        let err = "monthly".parse::<PatternView>().unwrap_err();
        assert!(matches!(err, ClusterError::InvalidView { name } if name == "monthly"));
    }

    #[test]
    fn display_round_trips() {
        for view in PatternView::ALL {
            assert_eq!(view.to_string().parse::<PatternView>().unwrap(), view);
        }
    }
}
