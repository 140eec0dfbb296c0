use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a game server on the status board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerStatus {
    Online,
    Offline,
    Maintenance,
    Unknown,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Online => write!(f, "en ligne"),
            ServerStatus::Offline => write!(f, "hors ligne"),
            ServerStatus::Maintenance => write!(f, "maintenance"),
            ServerStatus::Unknown => write!(f, "inconnu"),
        }
    }
}

/// Whether a server may be offered for reservation. This is the calendar's
/// own status list, supplied separately from the fleet board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Occupied,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "disponible"),
            Availability::Occupied => write!(f, "occupé"),
        }
    }
}

/// One entry of the reservation calendar's server list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSlot {
    pub id: String,
    pub name: String,
    pub status: Availability,
}

impl ServerSlot {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: Availability) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.status == Availability::Available
    }
}

/// One row of the server status board. Metric fields are percentages in
/// [0, 100]; `players` never exceeds `max_players`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    pub status: ServerStatus,
    pub players: u32,
    pub max_players: u32,
    pub cpu: f64,
    pub memory: f64,
    pub disk: u8,
    pub uptime: String,
    pub version: String,
    pub ip: String,
    pub port: u16,
    pub last_update: DateTime<Utc>,
}

/// Simulated lifecycle action a panel user can request on a server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerAction {
    Start,
    Stop,
    Restart,
}

impl fmt::Display for ServerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerAction::Start => write!(f, "start"),
            ServerAction::Stop => write!(f, "stop"),
            ServerAction::Restart => write!(f, "restart"),
        }
    }
}

/// Headline numbers shown above the status board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total: usize,
    pub online: usize,
    pub players: u32,
    pub avg_cpu: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_should_display_french_labels() {
        assert_eq!(ServerStatus::Online.to_string(), "en ligne");
        assert_eq!(ServerStatus::Offline.to_string(), "hors ligne");
        assert_eq!(ServerStatus::Maintenance.to_string(), "maintenance");
        assert_eq!(ServerStatus::Unknown.to_string(), "inconnu");
    }

    #[test]
    fn availability_should_display_french_labels() {
        assert_eq!(Availability::Available.to_string(), "disponible");
        assert_eq!(Availability::Occupied.to_string(), "occupé");
    }

    #[test]
    fn slot_selectable_should_follow_availability() {
        let free = ServerSlot::new("2", "Serveur #2", Availability::Available);
        let taken = ServerSlot::new("1", "Serveur #1", Availability::Occupied);

        assert!(free.is_selectable());
        assert!(!taken.is_selectable());
    }

    #[test]
    fn action_should_display_lowercase() {
        assert_eq!(ServerAction::Start.to_string(), "start");
        assert_eq!(ServerAction::Stop.to_string(), "stop");
        assert_eq!(ServerAction::Restart.to_string(), "restart");
    }
}
