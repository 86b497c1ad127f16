//! The time range activity is collected for.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

/// A month is approximated as 30 days.
const DAYS_PER_MONTH: i64 = 30;

/// Activity window starting at a cutoff and extending to the present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    cutoff: DateTime<Utc>,
}

impl ActivityWindow {
    /// Creates a window starting at `cutoff`, truncated to whole seconds.
    #[must_use]
    pub fn since(cutoff: DateTime<Utc>) -> Self {
        Self {
            cutoff: cutoff.trunc_subsecs(0),
        }
    }

    /// Creates a window covering the `months` (of 30 days) before `now`.
    ///
    /// Returns `None` when the cutoff falls outside the representable range.
    #[must_use]
    pub fn months_before(now: DateTime<Utc>, months: u32) -> Option<Self> {
        let span = TimeDelta::try_days(i64::from(months) * DAYS_PER_MONTH)?;
        now.checked_sub_signed(span).map(Self::since)
    }

    /// Earliest included moment.
    #[must_use]
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Cutoff formatted as the API expects it, e.g. `2024-01-31T08:00:00Z`.
    #[must_use]
    pub fn cutoff_iso(&self) -> String {
        self.cutoff.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Whether `timestamp` falls on or after the cutoff.
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_thirty_days() {
        let now: DateTime<Utc> = "2024-03-31T12:30:45.987Z".parse().unwrap();
        let window = ActivityWindow::months_before(now, 2).unwrap();

        assert_eq!(window.cutoff_iso(), "2024-01-31T12:30:45Z");
    }

    #[test]
    fn unrepresentable_cutoff_is_none() {
        let now: DateTime<Utc> = "2024-03-31T12:00:00Z".parse().unwrap();

        assert!(ActivityWindow::months_before(now, 100_000_000).is_none());
        assert!(ActivityWindow::months_before(now, u32::MAX).is_none());
        assert!(ActivityWindow::months_before(now, 1200).is_some());
    }

    #[test]
    fn cutoff_is_inclusive() {
        let window = ActivityWindow::since("2024-01-01T00:00:00Z".parse().unwrap());

        assert!(window.contains("2024-01-01T00:00:00Z".parse().unwrap()));
        assert!(window.contains("2024-06-01T00:00:00Z".parse().unwrap()));
        assert!(!window.contains("2023-12-31T23:59:59Z".parse().unwrap()));
    }
}
