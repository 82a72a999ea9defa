//!
//! StaffHub demo shell: restores the session, seeds the demo roster and
//! walks the dashboard. Reads configuration from TOML file
//! (~/.config/staffhub/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use staffhub::application::{Intent, RosterService, SessionStore, ViewRouter, DEMO_PASSWORD};
use staffhub::config::AppConfig;
use staffhub::default_config_path;
use staffhub::infrastructure::{FileSessionSlot, InMemoryEmployeeRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("STAFFHUB_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting StaffHub...");

    // ── Session ────────────────────────────────────────────────
    let slot = FileSessionSlot::new(app_cfg.session.resolved_slot_path());
    let mut session = SessionStore::new(Box::new(slot));
    session.restore();
    if session.current().is_none() {
        session.sign_in("admin@company.com", DEMO_PASSWORD)?;
    }
    let actor = match session.current() {
        Some(user) => user.clone(),
        None => return Err("no active session".into()),
    };
    info!("Active session: {} ({})", actor.name, actor.role);

    // ── Roster ─────────────────────────────────────────────────
    let repo = Arc::new(InMemoryEmployeeRepository::with_demo_roster());
    let roster = RosterService::new(repo);

    let mut router = ViewRouter::new();
    router
        .apply(Intent::NavigateDashboard, &actor, &roster)
        .await?;

    let stats = roster.stats(&actor).await?;
    info!(
        "Roster: {} employees, {} active, {} inactive, avg salary {}",
        stats.total, stats.active, stats.inactive, stats.average_salary
    );
    for hire in roster.recent_hires(&actor, 5).await? {
        info!("Recent hire: {} ({})", hire.full_name(), hire.hire_date);
    }
    for (department, count) in roster.department_distribution(&actor).await? {
        info!("{department}: {count}");
    }

    Ok(())
}
