use abi::{
    CalendarDate, DateClaim, Reservation, ReservationSummary, SelectionConfig, SelectionError,
};

use crate::{Pick, SelectionManager, Toggle};

impl Pick for SelectionManager {
    fn toggle_date(
        &mut self,
        candidate: CalendarDate,
        reserved: &[Reservation],
    ) -> Result<Toggle, SelectionError> {
        // reserved days win over everything, including toggle-off
        if let Some(claim) = DateClaim::lookup(candidate, reserved) {
            return Err(SelectionError::DateUnavailable(claim));
        }

        if let Some(pos) = self.picked.iter().position(|d| *d == candidate) {
            self.picked.remove(pos);
            return Ok(Toggle::Removed);
        }

        if self.picked.len() >= self.limit {
            return Err(SelectionError::SelectionLimitReached { limit: self.limit });
        }

        self.picked.push(candidate);
        self.picked.sort();
        Ok(Toggle::Added)
    }

    fn set_server(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.server = if name.is_empty() { None } else { Some(name) };
    }

    fn confirm(&mut self) -> Result<ReservationSummary, SelectionError> {
        if self.picked.is_empty() {
            return Err(SelectionError::NoDatesSelected);
        }

        let server = match self.server.take() {
            Some(server) => server,
            None => return Err(SelectionError::NoResourceSelected),
        };

        let dates = std::mem::take(&mut self.picked);
        Ok(ReservationSummary::new(dates, server))
    }
}

impl SelectionManager {
    pub fn new(config: &SelectionConfig) -> Self {
        Self::with_limit(config.max_days)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            picked: Vec::new(),
            server: None,
            limit,
        }
    }

    /// Currently picked days, sorted ascending.
    pub fn picked(&self) -> &[CalendarDate] {
        &self.picked
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
