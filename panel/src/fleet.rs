use std::collections::HashMap;

use abi::{
    FleetConfig, FleetStats, Notice, SelectionError, ServerAction, ServerInfo, ServerStatus,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Simulated game-server fleet backing the status board. Nothing here talks
/// to a real process; refresh ticks only drift the in-memory records so the
/// board looks alive.
#[derive(Debug)]
pub struct Fleet {
    servers: Vec<ServerInfo>,
    // restart deadlines, keyed by server id
    restarts: HashMap<String, DateTime<Utc>>,
    grace: Duration,
}

impl Fleet {
    pub fn new(servers: Vec<ServerInfo>, config: &FleetConfig) -> Self {
        Self {
            servers,
            restarts: HashMap::new(),
            grace: Duration::seconds(config.restart_grace_secs as i64),
        }
    }

    /// The five-server fleet the demo panel ships with.
    // TODO: derive uptime from a start timestamp instead of the seeded label
    pub fn demo(config: &FleetConfig) -> Self {
        let now = Utc::now();
        let base = |id: &str, name: &str| ServerInfo {
            id: id.into(),
            name: name.into(),
            status: ServerStatus::Online,
            players: 0,
            max_players: 20,
            cpu: 0.0,
            memory: 0.0,
            disk: 0,
            uptime: "0m".into(),
            version: "1.3.0".into(),
            ip: String::new(),
            port: 0,
            last_update: now,
        };

        Self::new(
            vec![
                ServerInfo {
                    players: 12,
                    cpu: 45.0,
                    memory: 67.0,
                    disk: 23,
                    uptime: "3j 14h 22m".into(),
                    ip: "192.168.1.100".into(),
                    port: 1027,
                    ..base("1", "SMOO Server #1")
                },
                ServerInfo {
                    players: 8,
                    cpu: 32.0,
                    memory: 54.0,
                    disk: 18,
                    uptime: "1j 8h 45m".into(),
                    ip: "192.168.1.101".into(),
                    port: 1028,
                    ..base("2", "SMOO Server #2")
                },
                ServerInfo {
                    status: ServerStatus::Maintenance,
                    disk: 25,
                    ip: "192.168.1.102".into(),
                    port: 1029,
                    ..base("3", "SMOO Server #3")
                },
                ServerInfo {
                    status: ServerStatus::Offline,
                    disk: 15,
                    ip: "192.168.1.103".into(),
                    port: 1030,
                    ..base("4", "SMOO Server #4")
                },
                ServerInfo {
                    players: 15,
                    cpu: 78.0,
                    memory: 82.0,
                    disk: 31,
                    uptime: "5j 2h 10m".into(),
                    ip: "192.168.1.104".into(),
                    port: 1031,
                    ..base("5", "SMOO Server #5")
                },
            ],
            config,
        )
    }

    pub fn servers(&self) -> &[ServerInfo] {
        &self.servers
    }

    /// One board tick: finish restarts whose grace period elapsed, drift the
    /// metrics of online servers, zero everything else, stamp `last_update`.
    pub fn refresh<R: Rng>(&mut self, now: DateTime<Utc>, rng: &mut R) {
        let servers = &mut self.servers;
        self.restarts.retain(|id, due| {
            if now < *due {
                return true;
            }
            if let Some(server) = servers.iter_mut().find(|s| &s.id == id) {
                server.status = ServerStatus::Online;
            }
            false
        });

        for server in servers.iter_mut() {
            if server.status == ServerStatus::Online {
                server.cpu = (server.cpu + (rng.gen::<f64>() - 0.5) * 10.0).clamp(0.0, 100.0);
                server.memory = (server.memory + (rng.gen::<f64>() - 0.5) * 5.0).clamp(0.0, 100.0);
                let drift = ((rng.gen::<f64>() - 0.5) * 3.0).floor() as i64;
                server.players = (i64::from(server.players) + drift)
                    .clamp(0, i64::from(server.max_players)) as u32;
            } else {
                server.cpu = 0.0;
                server.memory = 0.0;
                server.players = 0;
            }
            server.last_update = now;
        }
    }

    /// Run a control action against one server and report the toast the
    /// board shows for it.
    pub fn apply(
        &mut self,
        id: &str,
        action: ServerAction,
        now: DateTime<Utc>,
    ) -> Result<Notice, SelectionError> {
        let server = self
            .servers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SelectionError::InvalidServer(id.to_string()))?;

        match action {
            ServerAction::Start => {
                server.status = ServerStatus::Online;
                self.restarts.remove(id);
            }
            ServerAction::Stop => {
                server.status = ServerStatus::Offline;
                server.players = 0;
                server.cpu = 0.0;
                server.memory = 0.0;
                self.restarts.remove(id);
            }
            ServerAction::Restart => {
                server.status = ServerStatus::Maintenance;
                server.players = 0;
                server.cpu = 0.0;
                server.memory = 0.0;
                self.restarts.insert(id.to_string(), now + self.grace);
            }
        }

        Ok(Notice::new(
            format!("Action {} exécutée", action),
            format!("Serveur {} - {}", id, action),
        ))
    }

    /// Headline numbers for the board: player counts over the whole fleet,
    /// cpu averaged over online servers only.
    pub fn stats(&self) -> FleetStats {
        let online: Vec<_> = self
            .servers
            .iter()
            .filter(|s| s.status == ServerStatus::Online)
            .collect();

        let avg_cpu = if online.is_empty() {
            0
        } else {
            (online.iter().map(|s| s.cpu).sum::<f64>() / online.len() as f64).round() as u32
        };

        FleetStats {
            total: self.servers.len(),
            online: online.len(),
            players: self.servers.iter().map(|s| s.players).sum(),
            avg_cpu,
        }
    }
}
