mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "4000".into())
        .parse()
        .expect("invalid PORT");
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into());

    let store = services::store::FileStore::open(&data_dir)
        .await
        .expect("account store init failed");
    let sessions = services::session::SessionRegistry::new();
    let state = state::AppState::new(Arc::new(store), sessions);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %data_dir, "coachfit companion listening");
    axum::serve(listener, app).await.expect("server failed");
}
