use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Notice};

/// Result of a confirmed reservation: the snapshot of selected dates, the
/// chosen server and the day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub dates: Vec<CalendarDate>,
    pub server: String,
    pub day_count: usize,
}

impl ReservationSummary {
    pub fn new(dates: Vec<CalendarDate>, server: impl Into<String>) -> Self {
        let day_count = dates.len();
        Self {
            dates,
            server: server.into(),
            day_count,
        }
    }

    /// Confirmation toast shown once the reservation goes through.
    pub fn notice(&self) -> Notice {
        Notice::new(
            "Réservation confirmée !",
            format!("{} réservé pour {} jour(s).", self.server, self.day_count),
        )
    }
}
