use serde::{Deserialize, Serialize};

use crate::{CalendarDate, SelectionError};

/// An existing claim on a server, supplied to the panel as read-only
/// reference data. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub dates: Vec<CalendarDate>,
    pub server: String,
    pub user: String,
}

impl Reservation {
    pub fn new(
        dates: Vec<CalendarDate>,
        server: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            dates,
            server: server.into(),
            user: user.into(),
        }
    }

    /// Whether this reservation claims the given calendar day.
    pub fn covers(&self, day: CalendarDate) -> bool {
        self.dates.contains(&day)
    }

    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.server.is_empty() {
            return Err(SelectionError::InvalidServer(self.server.clone()));
        }

        if self.user.is_empty() {
            return Err(SelectionError::InvalidOwner(self.user.clone()));
        }

        if self.dates.is_empty() {
            return Err(SelectionError::EmptyReservation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn covers_should_match_same_day_only() {
        let rsvp = Reservation::new(
            vec![day(2024, 6, 10), day(2024, 6, 11)],
            "Serveur #1",
            "Player123",
        );

        assert!(rsvp.covers(day(2024, 6, 10)));
        assert!(rsvp.covers(day(2024, 6, 11)));
        assert!(!rsvp.covers(day(2024, 6, 12)));
    }

    #[test]
    fn validate_should_work() {
        let rsvp = Reservation::new(vec![day(2024, 6, 15)], "Serveur #3", "GamerPro");
        assert!(rsvp.validate().is_ok());
    }

    #[test]
    fn validate_should_reject_empty_server() {
        let rsvp = Reservation::new(vec![day(2024, 6, 15)], "", "GamerPro");
        assert_eq!(
            rsvp.validate().unwrap_err(),
            SelectionError::InvalidServer("".to_string())
        );
    }

    #[test]
    fn validate_should_reject_empty_user() {
        let rsvp = Reservation::new(vec![day(2024, 6, 15)], "Serveur #3", "");
        assert_eq!(
            rsvp.validate().unwrap_err(),
            SelectionError::InvalidOwner("".to_string())
        );
    }

    #[test]
    fn validate_should_reject_empty_dates() {
        let rsvp = Reservation::new(vec![], "Serveur #3", "GamerPro");
        assert_eq!(rsvp.validate().unwrap_err(), SelectionError::EmptyReservation);
    }
}
