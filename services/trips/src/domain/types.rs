use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::TripsServiceError;

/// A planned journey with its status flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_completed: bool,
    pub is_archived: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A trip together with its linked catalog rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub activities: Vec<Activity>,
    pub accommodations: Vec<Accommodation>,
}

/// Shared catalog entry for something to do.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Shared catalog entry for a place to stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub cost: f64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Repository report for a directed link add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    AlreadyLinked,
    TripMissing,
}

/// A completed trip cannot stay archived; the toggle that sets
/// `completed` clears `archived`.
pub fn normalize_status(is_completed: bool, is_archived: bool) -> (bool, bool) {
    if is_completed {
        (true, false)
    } else {
        (is_completed, is_archived)
    }
}

pub fn validate_date_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), TripsServiceError> {
    if end_date < start_date {
        return Err(TripsServiceError::InvalidDateRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn should_clear_archived_when_completed() {
        assert_eq!(normalize_status(true, true), (true, false));
        assert_eq!(normalize_status(true, false), (true, false));
    }

    #[test]
    fn should_keep_archived_when_not_completed() {
        assert_eq!(normalize_status(false, true), (false, true));
        assert_eq!(normalize_status(false, false), (false, false));
    }

    #[test]
    fn should_accept_ordered_date_range() {
        assert!(validate_date_range(date("2026-05-01"), date("2026-05-10")).is_ok());
        assert!(validate_date_range(date("2026-05-01"), date("2026-05-01")).is_ok());
    }

    #[test]
    fn should_reject_inverted_date_range() {
        assert!(matches!(
            validate_date_range(date("2026-05-10"), date("2026-05-01")),
            Err(TripsServiceError::InvalidDateRange)
        ));
    }
}
