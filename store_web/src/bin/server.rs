use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use std::error::Error;

use store_core::config::ServerConfig;
use store_core::storage::Store;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "store_web/config/server.toml")]
    config: String,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = ServerConfig::from_file(&args.config)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let store = Store::connect(&config.database_url()).await?;
    store.initialize_schema().await?;
    let store = web::Data::new(store);

    log::info!("starting store server at {}", config.server_address);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Logger::default())
            .configure(store_web::configure)
    })
    .bind(&config.server_address)?
    .run()
    .await?;

    Ok(())
}
