//! Catalog console entry point.

use config::Config;
use dotenvy::dotenv;

use storefront::models::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = match Config::builder()
        .add_source(config::File::with_name("storefront").required(false))
        .add_source(config::Environment::default())
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to read configuration: {err}");
            std::process::exit(1);
        }
    };

    let app_config: AppConfig = match config.try_deserialize() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Failed to parse configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = storefront::run(app_config).await {
        log::error!("Fatal error: {err}");
        std::process::exit(1);
    }
}
