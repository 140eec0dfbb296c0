use abi::{
    CalendarDate, Config, FleetStats, Notice, Reservation, ReservationSummary, SelectionError,
    ServerAction, ServerInfo, ServerSlot,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use selection::{Pick, SelectionManager, Toggle};
use tracing::{info, warn};

use crate::{Catalog, Fleet};

/// Facade the dashboard drives. Owns the in-progress selection together with
/// the data it is validated against; every user action goes through here.
#[derive(Debug)]
pub struct PanelService {
    selector: SelectionManager,
    catalog: Catalog,
    fleet: Fleet,
}

/// Headline numbers for the overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    pub active_reservations: usize,
    pub servers_free: usize,
    pub servers_total: usize,
}

impl PanelService {
    /// build a panel over the demo dataset
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Catalog::demo(), Fleet::demo(&config.fleet))
    }

    pub fn new(config: &Config, catalog: Catalog, fleet: Fleet) -> Self {
        Self {
            selector: SelectionManager::new(&config.selection),
            catalog,
            fleet,
        }
    }

    /// toggle a calendar day against the current reservation list
    pub fn toggle_date(&mut self, day: CalendarDate) -> Result<Toggle, SelectionError> {
        let result = self.selector.toggle_date(day, self.catalog.reservations());
        match &result {
            Ok(Toggle::Added) => info!(%day, "date added to selection"),
            Ok(Toggle::Removed) => info!(%day, "date removed from selection"),
            Err(e) => warn!(%day, error = %e, "toggle rejected"),
        }
        result
    }

    /// pick the server the reservation is for
    pub fn set_server(&mut self, name: impl Into<String>) {
        self.selector.set_server(name);
        info!(server = ?self.selector.server(), "server choice updated");
    }

    /// confirm the pending selection and reset the form
    pub fn confirm(&mut self) -> Result<ReservationSummary, SelectionError> {
        let result = self.selector.confirm();
        match &result {
            Ok(summary) => {
                info!(server = %summary.server, days = summary.day_count, "reservation confirmed")
            }
            Err(e) => warn!(error = %e, "confirmation rejected"),
        }
        result
    }

    pub fn picked(&self) -> &[CalendarDate] {
        self.selector.picked()
    }

    pub fn server(&self) -> Option<&str> {
        self.selector.server()
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.catalog.reservations()
    }

    pub fn slots(&self) -> &[ServerSlot] {
        self.catalog.slots()
    }

    /// server names offered in the selection dropdown
    pub fn selectable_servers(&self) -> Vec<&str> {
        self.catalog.selectable_servers()
    }

    pub fn servers(&self) -> &[ServerInfo] {
        self.fleet.servers()
    }

    /// advance the status board by one tick
    pub fn refresh_fleet<R: Rng>(&mut self, now: DateTime<Utc>, rng: &mut R) {
        self.fleet.refresh(now, rng);
    }

    /// run a control action against one fleet server
    pub fn server_action(
        &mut self,
        id: &str,
        action: ServerAction,
        now: DateTime<Utc>,
    ) -> Result<Notice, SelectionError> {
        let result = self.fleet.apply(id, action, now);
        match &result {
            Ok(_) => info!(id, %action, "server action applied"),
            Err(e) => warn!(id, %action, error = %e, "server action rejected"),
        }
        result
    }

    pub fn fleet_stats(&self) -> FleetStats {
        self.fleet.stats()
    }

    /// numbers for the overview cards
    pub fn overview(&self) -> Overview {
        Overview {
            active_reservations: self.catalog.reservations().len(),
            servers_free: self.catalog.selectable_servers().len(),
            servers_total: self.catalog.slots().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_panel() -> PanelService {
        let config = Config::load("fixtures/config.yml").unwrap();
        PanelService::from_config(&config)
    }

    fn day(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn panel_toggle_reserved_date_should_reject() {
        let mut panel = test_panel();

        let err = panel.toggle_date(day(2024, 6, 10)).unwrap_err();
        let notice = Notice::from(&err);

        assert_eq!(notice.title, "Date non disponible");
        assert_eq!(
            notice.description,
            "Cette date est déjà réservée par un autre utilisateur."
        );
        assert!(panel.picked().is_empty());
    }

    #[test]
    fn panel_reservation_flow_should_work() {
        let mut panel = test_panel();

        for d in [14, 12, 13] {
            panel.toggle_date(day(2024, 6, d)).unwrap();
        }
        assert_eq!(
            panel.picked(),
            &[day(2024, 6, 12), day(2024, 6, 13), day(2024, 6, 14)]
        );

        let err = panel.toggle_date(day(2024, 6, 16)).unwrap_err();
        assert_eq!(err, SelectionError::SelectionLimitReached { limit: 3 });

        panel.set_server("Serveur #2");
        let summary = panel.confirm().unwrap();

        assert_eq!(summary.server, "Serveur #2");
        assert_eq!(summary.day_count, 3);
        assert_eq!(
            summary.notice().description,
            "Serveur #2 réservé pour 3 jour(s)."
        );

        // the form resets for the next reservation
        assert!(panel.picked().is_empty());
        assert_eq!(panel.server(), None);
    }

    #[test]
    fn panel_confirm_without_dates_should_reject() {
        let mut panel = test_panel();

        let err = panel.confirm().unwrap_err();
        let notice = Notice::from(&err);

        assert_eq!(notice.title, "Aucune date sélectionnée");
    }

    #[test]
    fn panel_should_only_offer_available_servers() {
        let panel = test_panel();

        assert_eq!(
            panel.selectable_servers(),
            vec!["Serveur #2", "Serveur #4", "Serveur #5"]
        );
    }

    #[test]
    fn overview_should_work() {
        let panel = test_panel();
        let overview = panel.overview();

        assert_eq!(overview.active_reservations, 2);
        assert_eq!(overview.servers_free, 3);
        assert_eq!(overview.servers_total, 5);
    }
}
