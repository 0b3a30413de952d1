#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use schedule_planner::{Scheduler, SchedulerConfig, http_api};

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SchedulerConfig::from_json_file(path)?,
        None => SchedulerConfig::default(),
    }
    .with_env_overrides();

    let addr: SocketAddr = config.http_addr.parse()?;
    let scheduler = Scheduler::from_config(&config)?;

    println!("schedule-planner HTTP API listening on http://{addr}");
    http_api::serve(addr, scheduler).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
