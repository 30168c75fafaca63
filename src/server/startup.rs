use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{assets::StaticAssets, config::Config, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info`, which includes the per-request
/// access log line.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// character table exists. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    tracing::info!("Connecting to {}", config.database_url);

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = match Database::connect(opt).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Error connecting to database: {}", e);
            return Err(e.into());
        }
    };

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// Locates the built front end, if one is deployed.
///
/// # Returns
/// - `Some(StaticAssets)` - `config.static_dir` exists and will be served
/// - `None` - No front end; unmatched requests always get the unknown-endpoint 404
pub fn setup_static_assets(config: &Config) -> Option<StaticAssets> {
    let assets = StaticAssets::from_dir(&config.static_dir);

    match assets {
        Some(ref assets) => {
            tracing::info!("Serving static assets from {}", assets.root().display())
        }
        None => tracing::info!(
            "Static directory {} not found, front end disabled",
            config.static_dir.display()
        ),
    }

    assets
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutting down gracefully...");
}
