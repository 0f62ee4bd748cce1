//! Recipe Explorer server: reads config from the environment, ensures the recipes table exists, serves the API.

use recipe_explorer::{
    app, ensure_database_exists, ensure_recipes_table, AppConfig, AppState, DatabaseTarget, GroqProvider,
    MemoryRecipeStore, PgRecipeStore, SuggestionGateway,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recipe_explorer=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; /ai/suggest will answer 503");
    }
    let suggestions = SuggestionGateway::new(GroqProvider::new(&config.ai_base_url, config.groq_api_key.clone()));

    let state = match &config.database {
        DatabaseTarget::Postgres { url, max_connections } => {
            ensure_database_exists(url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(url)
                .await?;
            ensure_recipes_table(&pool).await?;
            AppState::new(PgRecipeStore::new(pool), suggestions)
        }
        DatabaseTarget::Memory => {
            tracing::warn!("using in-memory recipe store; data is lost on exit");
            AppState::new(MemoryRecipeStore::new(), suggestions)
        }
    };

    let router = app(state, &config)?;
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        environment = ?config.environment,
        docs = config.environment.docs_enabled(),
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("shutting down");
}
