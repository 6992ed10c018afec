//! The concrete application state served by the binary.

use crate::ConnectFailurePolicy;
use catalog_core::ports::Application;
use catalog_sqlite::{Db, config::SqliteConfig};

/// Application state for the catalog server.
///
/// Carries the SQLite repository, or nothing at all when the startup
/// connection failed under the `degrade` policy.
#[derive(Clone)]
pub struct CatalogApp {
    db: Option<Db>,
}

impl CatalogApp {
    /// Wrap an (optionally absent) database connection.
    pub fn new(db: Option<Db>) -> Self {
        Self { db }
    }

    /// Open the database and apply the startup-failure policy.
    ///
    /// A connection failure is logged with the fixed message either way;
    /// `Exit` then propagates the error, while `Degrade` yields a state
    /// that keeps serving without a store (every store-backed endpoint
    /// answers 500 until a restart).
    pub async fn connect(
        database: &SqliteConfig,
        on_connect_failure: ConnectFailurePolicy,
    ) -> anyhow::Result<Self> {
        match Db::open(database).await {
            Ok(db) => Ok(Self::new(Some(db))),
            Err(err) => {
                tracing::error!(err = err.to_string(), "Hubo un error al conectar la DB");
                match on_connect_failure {
                    ConnectFailurePolicy::Exit => Err(err.into()),
                    ConnectFailurePolicy::Degrade => Ok(Self::new(None)),
                }
            }
        }
    }
}

impl Application for CatalogApp {
    type Repository = Db;

    fn database(&self) -> Option<&Db> {
        self.db.as_ref()
    }
}
