use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wellbeing_hub::config::AccessConfig;
use wellbeing_hub::nav::NavMenu;
use wellbeing_hub::routes::RouteTable;
use wellbeing_hub::identity::SessionStore;

// Usage: wellbeing-hub <email> [path ...]
// Signs in against the sample accounts and prints what that user sees.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("log filter")?;
    fmt().with_env_filter(filter).init();

    let config = AccessConfig::from_env();
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    info!(
        target: "wellbeing",
        "Wellbeing Hub starting: RUST_LOG='{}', login_path='{}', landing_path='{}', login_latency_ms={}, logout_latency_ms={}",
        rust_log, config.login_path, config.landing_path,
        config.login_latency.as_millis(), config.logout_latency.as_millis()
    );

    let mut args = std::env::args().skip(1);
    let email = args.next().context("usage: wellbeing-hub <email> [path ...]")?;
    let mut paths: Vec<String> = args.collect();
    if paths.is_empty() {
        paths = ["/", "/dashboard", "/students", "/cases", "/reports", "/settings", "/nope"]
            .iter().map(|s| s.to_string()).collect();
    }

    let session = SessionStore::demo(&config);
    let routes = RouteTable::dashboard(&config);
    let menu = NavMenu::dashboard();

    session.login(&email, "").await.with_context(|| format!("login as {}", email))?;
    let Some(me) = session.current_identity() else {
        anyhow::bail!("login returned without an identity");
    };
    println!("{} ({}) [{}]", me.full_name(), me.role().label(), me.initials());

    for (section, items) in menu.sections(Some(&*me)) {
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        println!("{}: {}", section.label(), titles.join(", "));
    }
    println!("capabilities: {}", serde_json::to_string(&session.capabilities())?);

    let snapshot = session.snapshot();
    for p in &paths {
        println!("{:<12} {}", p, serde_json::to_string(&routes.decide(&snapshot, p))?);
    }

    session.logout().await?;
    session.close();
    Ok(())
}
