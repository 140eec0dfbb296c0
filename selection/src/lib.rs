use abi::{CalendarDate, Reservation, ReservationSummary, SelectionError};

mod manager;

/// In-progress reservation state: the picked days and the chosen server.
/// Reserved-date reference data is not held here; the caller supplies a
/// fresh snapshot on every toggle.
#[derive(Debug)]
pub struct SelectionManager {
    picked: Vec<CalendarDate>,
    server: Option<String>,
    limit: usize,
}

/// Outcome of a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

pub trait Pick {
    /// toggle a calendar day in the current selection, validating the
    /// candidate against the reserved set supplied by the caller
    fn toggle_date(
        &mut self,
        candidate: CalendarDate,
        reserved: &[Reservation],
    ) -> Result<Toggle, SelectionError>;
    /// choose the server to reserve, replacing any previous choice; an
    /// empty name clears it
    fn set_server(&mut self, name: impl Into<String>);
    /// confirm the current selection, producing the summary and resetting
    /// the state
    fn confirm(&mut self) -> Result<ReservationSummary, SelectionError>;
}
