use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Reservation};

/// Identifies the existing reservation a rejected candidate collides with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateClaim {
    pub date: CalendarDate,
    pub server: String,
    pub user: String,
}

impl DateClaim {
    /// Scan the reserved set for a reservation claiming the candidate day.
    pub fn lookup(candidate: CalendarDate, reserved: &[Reservation]) -> Option<Self> {
        reserved.iter().find(|r| r.covers(candidate)).map(|r| Self {
            date: candidate,
            server: r.server.clone(),
            user: r.user.clone(),
        })
    }
}
