use crate::setup::{env_param, VarError};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    Pool, Postgres,
};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub ssl_mode: PgSslMode,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, VarError> {
        Ok(Self {
            host: env_param("DB_SERVER")?,
            database: env_param("DB_NAME")?,
            user: env_param("DB_USER")?,
            password: env_param("DB_PASSWORD")?,
            port: env_param("DB_PORT")?,
            ssl_mode: ssl_mode_param()?,
        })
    }
}

fn ssl_mode_param() -> Result<PgSslMode, VarError> {
    match env_param::<String>("DB_SSL_MODE") {
        Ok(v) => match v.as_str() {
            "disable" => Ok(PgSslMode::Disable),
            "prefer" => Ok(PgSslMode::Prefer),
            "require" => Ok(PgSslMode::Require),
            _ => Err(VarError::Invalid("DB_SSL_MODE")),
        },
        Err(VarError::NotProvided(_)) => Ok(PgSslMode::Prefer),
        Err(e) => Err(e),
    }
}

/// Opens the single shared pool with driver-default settings. All request
/// handlers borrow connections from this pool; a startup failure aborts the
/// process.
pub async fn connect(config: &DatabaseConfig) -> Result<Pool<Postgres>, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .ssl_mode(config.ssl_mode);

    match PgPoolOptions::new().connect_with(options).await {
        Ok(pool) => {
            tracing::info!(
                host = config.host,
                database = config.database,
                "Connected to database"
            );
            Ok(pool)
        }
        Err(e) => {
            tracing::error!(error = e.to_string(), "Database connection failed");
            Err(e)
        }
    }
}
