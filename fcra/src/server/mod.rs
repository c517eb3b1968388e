// fcra/src/server/mod.rs

pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::info;

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/summary_stats", get(handlers::summary_stats))
        .route("/api/summary_table", get(handlers::summary_table))
        .route("/api/as_of_date", get(handlers::as_of_date))
        .route("/api/trend", get(handlers::trend))
        .route("/api/portfolio_stats/{portfolio}", get(handlers::portfolio_stats))
        .route("/api/portfolio_data/{portfolio}", get(handlers::portfolio_data))
        .route("/api/update_record", post(handlers::update))
        .route("/api/filter_options/{portfolio}", get(handlers::filter_options))
        .route("/api/get_incomplete_count/{assignee}", get(handlers::open_task_count))
        .route("/api/export/{target}", get(handlers::export_sheet))
        .with_state(state)
}

/// Listens on `bind` until Ctrl-C.
pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "FCRA dashboard API listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
