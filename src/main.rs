use std::sync::Arc;

use climata::{get_configuration, load_snapshot, router, AppState, ClimataError, QueryEngine};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ClimataError> {
    env_logger::init();

    let settings = get_configuration()?;
    let snapshot = load_snapshot(&settings.dataset.stations, &settings.dataset.measurements)?;
    info!(
        "Loaded {} stations and {} measurements",
        snapshot.stations().len(),
        snapshot.measurements().len()
    );

    // Single publish point: the snapshot is complete before the listener
    // is bound, and handlers only ever clone the Arc.
    let state = AppState {
        engine: QueryEngine::new(Arc::new(snapshot)),
    };

    let listener = TcpListener::bind((
        settings.application.host.as_str(),
        settings.application.port,
    ))
    .await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
