mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::setup_cors(&config)?;

    let app = router::router(AppState::new(db)).layer(cors);

    let address = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(address).await?;

    tracing::info!("Gangue da Maverick API listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
