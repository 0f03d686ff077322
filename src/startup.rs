use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Error};

/// Default log directive when `RUST_LOG` is not set
pub static DEFAULT_LOG_DIRECTIVE: &str = "league=info";

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Install the global tracing subscriber writing to stderr
///
/// `RUST_LOG` takes precedence; otherwise each `-v` raises the crate's level
/// from info to debug to trace.
pub fn init_tracing(verbosity: u8) {
    let directive = match verbosity {
        0 => DEFAULT_LOG_DIRECTIVE,
        1 => "league=debug",
        _ => "league=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
