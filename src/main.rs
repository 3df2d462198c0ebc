use anyhow::Result;
use lead_harvester::app::App;
use lead_harvester::config::Config;
use lead_harvester::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();

    App::initialize(config).await?.run().await?;

    Ok(())
}
