use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, Transaction};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info};

use shared_config::AppConfig;

use crate::error::StoreError;

/// Shared handle to the clinic store.
///
/// Cloning is cheap: clones share the pool and the write lock. Every mutation
/// goes through [`Database::begin_write`], so two requests can never interleave
/// between a decision and the write that depends on it.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        Self::connect_with(&config.database_url, config.database_max_connections).await
    }

    pub async fn connect_with(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let in_memory = is_in_memory(url);
        debug!("Connecting to database (in_memory: {})", in_memory);

        let mut options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives exactly as long as its connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5));
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Migrated, private in-memory store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let db = Self::connect_with("sqlite::memory:", 1).await?;
        db.migrate().await?;
        Ok(db)
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Connection for reads.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        Ok(self.pool.acquire().await?)
    }

    /// Start a serialized write transaction.
    ///
    /// Holds the process-wide write lock until the transaction is committed or
    /// dropped. Dropping without commit rolls back. The transaction takes the
    /// SQLite reserved lock up front, so a snapshot read inside it can always
    /// be followed by a write.
    pub async fn begin_write(&self) -> Result<WriteTransaction, StoreError> {
        let guard = Arc::clone(&self.write_lock).lock_owned().await;
        let tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(WriteTransaction { tx, _guard: guard })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub struct WriteTransaction {
    // Declared before the guard so the transaction is released first on drop.
    tx: Transaction<'static, Sqlite>,
    _guard: OwnedMutexGuard<()>,
}

impl WriteTransaction {
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
