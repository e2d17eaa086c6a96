//! Single binary web server for the bracket tournament API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! BTMS_SEED=1 loads a demo tournament; BTMS_USERS / BTMS_ADMIN_PASSWORD configure logins.

use actix_web::{web::Data, App, HttpServer};
use btms::api::{self, AppState};
use btms::logic::{generate_demo_tournament, DEMO_TEAM_COUNT};
use btms::{Registry, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let accounts = config.load_accounts()?;

    let mut registry = Registry::new();
    if config.seed_demo_data {
        generate_demo_tournament(&mut registry, DEMO_TEAM_COUNT, &mut rand::thread_rng())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} ({} account(s))",
        bind.0,
        bind.1,
        accounts.len()
    );

    let state = Data::new(AppState::new(registry, accounts));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(actix_web::middleware::Logger::default())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
