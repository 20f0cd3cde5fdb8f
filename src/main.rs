//! HTTP server entry point.

use std::env;

use config::Config;
use dotenvy::dotenv;

use bookstore_api::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .set_default("address", "0.0.0.0")?
        .set_default("port", 3080)?
        .set_default("database_url", "bookstore.db")?
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Plain environment variables win, so `PORT` overrides the listen port.
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize::<ServerConfig>()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    bookstore_api::run(server_config).await
}
