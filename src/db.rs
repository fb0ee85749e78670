use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::config::DatabaseConfig;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Build the connection pool. Only the limits present in `config` are applied;
/// anything left unset keeps r2d2's own default.
pub fn create_pool(config: &DatabaseConfig) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    let mut builder = Pool::builder();
    if let Some(size) = config.pool_size {
        builder = builder.max_size(size);
    }
    if let Some(timeout) = config.acquire_timeout {
        builder = builder.connection_timeout(timeout);
    }
    if let Some(idle) = config.idle_timeout {
        builder = builder.idle_timeout(Some(idle));
    }
    builder.build(manager)
}
