//! Trend analysis over the assessment edit history
//!
//! Counts recent edits inside the trailing window and classifies
//! momentum from the balance of improvements (edits landing on `met`)
//! against regressions (edits landing on `not-met`). History keys that
//! match nothing in the catalog are counted like any other edit; the
//! engine never cross-checks referential integrity here.

use crate::models::{EditHistory, Momentum, Trends};
use chrono::{DateTime, Duration, Utc};

/// Default trailing window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Summarize edit activity inside the trailing window ending at `now`.
///
/// Absent or empty history yields zero activity and stable momentum.
pub fn analyze_trends(
    history: Option<&EditHistory>,
    now: DateTime<Utc>,
    window_days: i64,
) -> Trends {
    let Some(history) = history else {
        return Trends {
            recent_activity: 0,
            improvements: 0,
            regressions: 0,
            momentum: Momentum::Stable,
        };
    };

    let cutoff = now - Duration::days(window_days);
    let mut recent_activity = 0;
    let mut improvements = 0;
    let mut regressions = 0;

    for events in history.values() {
        for event in events {
            if event.timestamp < cutoff || event.timestamp > now {
                continue;
            }
            recent_activity += 1;
            match event.new_value.as_deref() {
                Some("met") => improvements += 1,
                Some("not-met") => regressions += 1,
                _ => {}
            }
        }
    }

    let momentum = match improvements.cmp(&regressions) {
        std::cmp::Ordering::Greater => Momentum::Positive,
        std::cmp::Ordering::Less => Momentum::Negative,
        std::cmp::Ordering::Equal => Momentum::Stable,
    };

    Trends {
        recent_activity,
        improvements,
        regressions,
        momentum,
    }
}
