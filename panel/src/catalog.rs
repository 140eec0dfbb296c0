use abi::{Availability, CalendarDate, Reservation, SelectionError, ServerSlot};

/// In-memory reference data the panel renders against: existing
/// reservations plus the calendar's own server availability list. Supplied
/// to the selection core as a read-only snapshot on every toggle.
#[derive(Debug, Clone)]
pub struct Catalog {
    reservations: Vec<Reservation>,
    slots: Vec<ServerSlot>,
}

impl Catalog {
    pub fn new(
        reservations: Vec<Reservation>,
        slots: Vec<ServerSlot>,
    ) -> Result<Self, SelectionError> {
        for reservation in &reservations {
            reservation.validate()?;
        }

        Ok(Self {
            reservations,
            slots,
        })
    }

    /// The dataset the demo panel ships with.
    pub fn demo() -> Self {
        let day = |y, m, d| CalendarDate::from_ymd(y, m, d).expect("valid demo date");

        Self {
            reservations: vec![
                Reservation::new(
                    vec![day(2024, 6, 10), day(2024, 6, 11)],
                    "Serveur #1",
                    "Player123",
                ),
                Reservation::new(vec![day(2024, 6, 15)], "Serveur #3", "GamerPro"),
            ],
            slots: vec![
                ServerSlot::new("1", "Serveur #1", Availability::Occupied),
                ServerSlot::new("2", "Serveur #2", Availability::Available),
                ServerSlot::new("3", "Serveur #3", Availability::Occupied),
                ServerSlot::new("4", "Serveur #4", Availability::Available),
                ServerSlot::new("5", "Serveur #5", Availability::Available),
            ],
        }
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn slots(&self) -> &[ServerSlot] {
        &self.slots
    }

    /// Names of the servers currently offered for selection.
    pub fn selectable_servers(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter(|slot| slot.is_selectable())
            .map(|slot| slot.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_should_work() {
        let catalog = Catalog::demo();

        assert_eq!(catalog.reservations().len(), 2);
        assert_eq!(catalog.slots().len(), 5);

        let first = &catalog.reservations()[0];
        assert_eq!(first.server, "Serveur #1");
        assert_eq!(first.user, "Player123");
        assert_eq!(first.dates.len(), 2);
    }

    #[test]
    fn selectable_servers_should_skip_occupied_slots() {
        let catalog = Catalog::demo();

        assert_eq!(
            catalog.selectable_servers(),
            vec!["Serveur #2", "Serveur #4", "Serveur #5"]
        );
    }

    #[test]
    fn new_should_reject_invalid_reservation() {
        let bad = Reservation::new(vec![], "Serveur #1", "Player123");
        let err = Catalog::new(vec![bad], vec![]).unwrap_err();

        assert_eq!(err, SelectionError::EmptyReservation);
    }
}
