mod errors;
mod handlers;
mod http;
mod sales;
mod setup;
mod user;

#[cfg(feature = "postgres")]
mod database;

#[cfg(feature = "postgres")]
mod impls {
    pub type UserRepo = crate::user::postgres_repository::PostgresUserRepository;
    pub type SalesRepo = crate::sales::postgres_repository::PostgresSalesRepository;
}

#[cfg(not(feature = "postgres"))]
mod impls {
    pub type UserRepo = crate::user::memory_repository::InMemoryUserRepository;
    pub type SalesRepo = crate::sales::memory_repository::InMemorySalesRepository;
}

use crate::{
    http::AppData,
    impls::*,
    sales::handlers::SalesHandlers,
    setup::{env_param, JsonPanicHandler},
    user::handlers::UserHandlers,
};
use axum::{routing, Router};
use std::{error::Error, net::SocketAddr};
use tower_http::{catch_panic::CatchPanicLayer, normalize_path::NormalizePathLayer};
use tracing_subscriber::EnvFilter;

pub type BoxedError = Box<dyn Error + Send + Sync>;

pub const ENCODING_FAILED_BODY: &[u8] =
    br#"{"success":false,"message":"Failed to encode the response body"}"#;

async fn body() -> Result<(), BoxedError> {
    #[cfg(feature = "dotenv")]
    dotenvy::dotenv().map_err(|_| crate::setup::VarError::DotenvFileNotFound)?;

    #[cfg(feature = "json-log")]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()?;

    #[cfg(not(feature = "json-log"))]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()?;

    let port = env_param("PORT").unwrap_or(5000_u16);
    let assumed_visits = env_param("APP_ASSUMED_VISITS").unwrap_or(1000.0_f64);

    let mut app = Router::new()
        .route(
            "/api/users",
            routing::get(handlers::get_users::<UserRepo>)
                .post(handlers::post_user::<UserRepo>),
        )
        .route(
            "/api/users/:id",
            routing::get(handlers::get_user_id::<UserRepo>)
                .put(handlers::put_user_id::<UserRepo>)
                .delete(handlers::delete_user_id::<UserRepo>),
        )
        .route(
            "/api/sales/by-category",
            routing::get(handlers::get_sales_by_category::<SalesRepo>),
        )
        .route(
            "/api/sales/stats",
            routing::get(handlers::get_sales_stats::<SalesRepo>),
        );

    #[cfg(feature = "postgres")]
    let pool = {
        let config = database::DatabaseConfig::from_env()?;
        database::connect(&config).await?
    };

    #[cfg(feature = "postgres")]
    {
        let user_handlers = UserHandlers::new(UserRepo::new(pool.clone()));
        let sales_handlers = SalesHandlers::new(SalesRepo::new(pool.clone()), assumed_visits);

        app = app
            .layer(AppData::extension(user_handlers))
            .layer(AppData::extension(sales_handlers));
    }

    #[cfg(not(feature = "postgres"))]
    {
        let user_handlers = UserHandlers::new(UserRepo::new());
        let sales_handlers = SalesHandlers::new(SalesRepo::new(), assumed_visits);

        app = app
            .layer(AppData::extension(user_handlers))
            .layer(AppData::extension(sales_handlers));
    }

    app = app
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(CatchPanicLayer::custom(JsonPanicHandler));

    #[cfg(feature = "http-trace")]
    {
        app = app.layer(tower_http::trace::TraceLayer::new_for_http());
    }
    #[cfg(feature = "http-cors")]
    {
        app = setup::setup_app_cors(app);
    }

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    tracing::info!(port, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    #[cfg(feature = "postgres")]
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = e.to_string(), "Failed to listen for shutdown signal");
    }
}

fn main() -> Result<(), BoxedError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed building the Runtime")
        .block_on(body())
}
