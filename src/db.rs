use sqlx::MySqlPool;

/// Lazy pool: the service starts even when MySQL is unreachable, the way
/// the register is meant to keep working offline. Connections are opened on
/// first use and submit/refresh surface the failure instead.
pub fn init_db(database_url: &str) -> MySqlPool {
    MySqlPool::connect_lazy(database_url).expect("DATABASE_URL must be a valid MySQL URL")
}
