use abi::{CalendarDate, Config, Notice, ServerAction};
use anyhow::Result;
use chrono::{Duration, Utc};
use panel::PanelService;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scripted walk through the panel: browse the board, build a reservation
/// the way a user would (including the rejections), then watch the fleet
/// tick and a server restart.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load("panel/fixtures/config.yml") {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "config not loaded, using defaults");
            Config::default()
        }
    };

    let mut panel = PanelService::from_config(&config);
    let mut rng = rand::thread_rng();
    let mut now = Utc::now();

    let overview = panel.overview();
    info!(
        active = overview.active_reservations,
        free = overview.servers_free,
        total = overview.servers_total,
        "panel ready"
    );
    for server in panel.servers() {
        info!(
            name = %server.name,
            status = %server.status,
            players = server.players,
            max_players = server.max_players,
            cpu = server.cpu,
            "fleet"
        );
    }

    // a reserved day bounces with the toast the calendar shows for it
    if let Err(e) = panel.toggle_date(date(2024, 6, 10)?) {
        toast(&Notice::from(&e));
    }

    // three free days go through, the fourth hits the limit
    for d in [12, 13, 14, 16] {
        if let Err(e) = panel.toggle_date(date(2024, 6, d)?) {
            toast(&Notice::from(&e));
        }
    }

    // swap a day out for another one
    panel.toggle_date(date(2024, 6, 13)?)?;
    panel.toggle_date(date(2024, 6, 16)?)?;

    let servers = panel
        .selectable_servers()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    info!(?servers, "servers open for reservation");
    panel.set_server(servers[0].clone());

    let summary = panel.confirm()?;
    toast(&summary.notice());
    for day in &summary.dates {
        info!(badge = %day.long_format(), "reserved day");
    }

    // the status board ticks a few times
    for _ in 0..3 {
        now += Duration::seconds(config.fleet.refresh_secs as i64);
        panel.refresh_fleet(now, &mut rng);
    }
    let stats = panel.fleet_stats();
    info!(
        total = stats.total,
        online = stats.online,
        players = stats.players,
        avg_cpu = stats.avg_cpu,
        "fleet stats"
    );

    // restart one server and watch it come back after the grace period
    let notice = panel.server_action("1", ServerAction::Restart, now)?;
    toast(&notice);
    info!(status = %panel.servers()[0].status, "server 1 during restart");

    now += Duration::seconds(config.fleet.refresh_secs as i64);
    panel.refresh_fleet(now, &mut rng);
    info!(status = %panel.servers()[0].status, "server 1 after grace period");

    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Result<CalendarDate> {
    CalendarDate::from_ymd(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {}-{}-{}", y, m, d))
}

fn toast(notice: &Notice) {
    info!(title = %notice.title, description = %notice.description, "toast");
}
