use aquadash::api::run_web_server;
use aquadash::config::{run_options::get_args, Config};
use aquadash::gateway::HttpGateway;
use aquadash::settings::store::AppState;
use aquadash::utils::start_log;
use std::{error::Error, sync::Arc};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    start_log();

    info!("Starting application...");
    let config = Config::load(get_args());

    let gateway = Arc::new(HttpGateway::new(&config.backend.endpoint));
    info!("Submitting settings to {}", gateway.url());
    let app_state = AppState::new(gateway);

    let addr = config.web_server.address.parse()?;
    run_web_server(app_state, addr).await?;
    Ok(())
}
