mod api;
mod app;
mod components;
mod config;
mod error;
mod flow;
mod message;
mod model;
mod render;
mod utils;
mod views;

use crate::config::ApiConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = ApiConfig::from_env().inspect_err(|err| log::error!("{err}"))?;
    app::run(config)?;
    Ok(())
}
