#[macro_use]
extern crate diesel;

use std::{cell::RefCell, ops::Deref, sync::Arc};

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use feedback_core::usecases as uc;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

// Applied to every connection when it is opened
const CONNECTION_PRAGMAS: &str = "
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000; -- milliseconds
";

// Persisted in the database file, only applied once at start up
const FILE_PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
";

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// Every connection to an in-memory database opens a new,
/// empty database.
fn is_in_memory(url: &str) -> bool {
    url == ":memory:" || url.contains("mode=memory") || url.starts_with("file::memory:")
}

/// A pooled connection that is held together with the lock
/// on the pool.
///
/// Readers share the pool, a writer has it for itself. This
/// prevents SQLite from answering concurrent writes with
/// "database is locked".
pub struct Db<L> {
    _lock: L,
    conn: RefCell<PooledConnection>,
}

pub type DbReadOnly<'a> = Db<RwLockReadGuard<'a, ConnectionPool>>;
pub type DbReadWrite<'a> = Db<RwLockWriteGuard<'a, ConnectionPool>>;

impl<L> Db<L>
where
    L: Deref<Target = ConnectionPool>,
{
    fn acquire(lock: L) -> Fallible<Self> {
        let conn = lock.get().inspect_err(|err| {
            log::error!("No database connection available: {err}");
        })?;
        Ok(Self {
            _lock: lock,
            conn: RefCell::new(conn),
        })
    }
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

enum TransactionError {
    Aborted(uc::Error),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

impl DbReadWrite<'_> {
    /// Runs `f` inside a transaction.
    ///
    /// Nothing is committed if `f` fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut pooled = self.conn.borrow_mut();
        let conn: &mut SqliteConnection = &mut pooled;
        conn.transaction::<T, TransactionError, _>(|conn| {
            let db = DbConnection {
                conn: RefCell::new(conn),
            };
            f(&db).map_err(|err| TransactionError::Aborted(err.into()))
        })
        .map_err(|err| match err {
            TransactionError::Aborted(err) => err,
            TransactionError::Database(err) => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    /// Opens a pool of connections to a SQLite database.
    ///
    /// An in-memory database is only reachable through a single
    /// connection that is kept open as long as the pool exists,
    /// the requested pool size is ignored in this case.
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        use diesel::Connection as _;
        // Fail early instead of letting r2d2 retry an inaccessible file
        let mut conn = SqliteConnection::establish(url)?;
        let in_memory = is_in_memory(url);
        if !in_memory {
            conn.batch_execute(FILE_PRAGMAS)?;
        }
        drop(conn);

        let builder = ConnectionPool::builder().connection_customizer(Box::new(ConnectionPragmas));
        let pool = if in_memory {
            if pool_size > 1 {
                log::warn!("Using a single connection for the in-memory database {url}");
            }
            builder
                .max_size(1)
                .max_lifetime(None)
                .idle_timeout(None)
                .build(ConnectionManager::new(url))?
        } else {
            builder
                .max_size(pool_size)
                .build(ConnectionManager::new(url))?
        };
        log::debug!(
            "Opened database {url} with {} pooled connection(s)",
            pool.max_size()
        );
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    #[must_use]
    pub fn pool_size(&self) -> u32 {
        self.pool.read().max_size()
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        Db::acquire(self.pool.read())
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        Db::acquire(self.pool.write())
    }
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    let mut pooled = db.conn.borrow_mut();
    let conn: &mut SqliteConnection = &mut pooled;
    let applied: Vec<String> = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to migrate database: {err}"))?
        .into_iter()
        .map(|version| version.to_string())
        .collect();
    if applied.is_empty() {
        log::info!("Database schema is up to date");
    } else {
        log::info!("Applied database migrations: {}", applied.join(", "));
    }
    Ok(())
}
