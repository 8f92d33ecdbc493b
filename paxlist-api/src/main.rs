use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use paxlist_api::{app, AppState};
use paxlist_store::{app_config::Config, seed, DbClient, SqlitePassengerRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "paxlist_api=debug,paxlist_store=info,paxlist_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting passenger manifest API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url, config.database.max_connections).await?;
    if config.database.run_migrations {
        db.migrate().await?;
    }

    let repo = Arc::new(SqlitePassengerRepository::new(db.pool.clone()));
    if config.database.seed_demo {
        seed::seed_demo_flight(&repo)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed demo flight: {}", e))?;
    }

    let app = app(AppState::new(repo));

    let host: IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
