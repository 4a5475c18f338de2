use cinema_booking::{
    adapters::{
        broadcast::{EventChannel, ReservationEventReceiver},
        memory::{InMemoryBookingLedger, InMemoryInventoryStore},
    },
    api::{handlers::AppState, router::create_router},
    application::reservation::{ReservationCoordinator, ServiceDependencies},
    cli::Menu,
    config::{AppConfig, Cli, Command},
};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_booking=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse command line arguments
    let cli = Cli::parse();
    let mode = cli.mode();
    let config = cli.config;
    tracing::debug!(?config, "Configuration loaded");

    // Initialize adapters
    let events = EventChannel::new(config.event_channel_capacity);
    let service_deps = ServiceDependencies {
        inventory: Arc::new(InMemoryInventoryStore::with_sample_data(
            config.seats_per_theater,
        )),
        ledger: Arc::new(InMemoryBookingLedger::new()),
        events: Arc::new(events.clone()),
    };

    // Log every reservation event
    tokio::spawn(log_events(events.subscribe()));

    let coordinator = ReservationCoordinator::new(service_deps);

    match mode {
        Command::Menu => run_menu(coordinator).await,
        Command::Serve => serve(coordinator, &config).await,
    }
}

async fn serve(coordinator: ReservationCoordinator, config: &AppConfig) -> Result<(), BoxError> {
    let app_state = Arc::new(AppState { coordinator });
    let app = create_router(app_state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn run_menu(coordinator: ReservationCoordinator) -> Result<(), BoxError> {
    // The menu blocks on stdin, keep it off the async workers
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Menu::new(&coordinator, stdin.lock(), stdout.lock()).run()
    })
    .await??;
    Ok(())
}

async fn log_events(mut receiver: ReservationEventReceiver) {
    loop {
        match receiver.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(json) => {
                    tracing::debug!(kind = event.kind(), event = %json, "Reservation event")
                }
                Err(e) => {
                    tracing::warn!(kind = event.kind(), "Failed to serialize event: {}", e)
                }
            },
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event logger lagged behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
