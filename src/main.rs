//! Server binary: reads config, picks the repository, serves the user routes.

use tokio::net::TcpListener;
use users_api::{
    app, connect, ensure_database_exists, ensure_users_table, AppState, Config,
    InMemoryUserRepository, PgUserRepository, StoreKind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("users_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = connect(&config).await?;
            ensure_users_table(&pool).await?;
            tracing::info!("using postgres store");
            AppState::new(PgUserRepository::new(pool))
        }
        StoreKind::Memory => {
            tracing::info!("using in-memory store");
            AppState::new(InMemoryUserRepository::empty())
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit)).await?;
    Ok(())
}
