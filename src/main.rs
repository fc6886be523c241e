use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorebox::scoreboard;
use scorebox::scoring::{handlers, repository::MatchRepository};
use scorebox::shared::AppState;
use scorebox::snapshot::InMemorySnapshotStore;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorebox=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scorebox live scoring server");

    // Create shared application state with dependency injection
    let match_repository = Arc::new(MatchRepository::new());
    let snapshot_store = Arc::new(InMemorySnapshotStore::new());
    let app_state = AppState::new(match_repository, snapshot_store);

    // Admin command surface plus the public scoreboard route
    let app = Router::new()
        .route("/", get(|| async { "scorebox" }))
        .route("/match", post(handlers::create_match))
        .route("/match/:match_id/toss", post(handlers::submit_toss))
        .route("/match/:match_id/overs", post(handlers::set_total_overs))
        .route("/match/:match_id/batsman", post(handlers::select_batsman))
        .route("/match/:match_id/bowler", post(handlers::select_bowler))
        .route("/match/:match_id/delivery", post(handlers::add_delivery))
        .route("/match/:match_id/wicket", post(handlers::record_wicket))
        .route("/match/:match_id/retire", post(handlers::retire_hurt))
        .route("/match/:match_id/manual", post(handlers::apply_manual_state))
        .route("/match/:match_id/reset", post(handlers::reset_innings))
        .route("/match/:match_id/restore", post(handlers::restore_match))
        .route(
            "/match/:match_id/scoreboard",
            get(scoreboard::get_scoreboard),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // The public view is served elsewhere and polls this API
    let addr = std::env::var("SCOREBOX_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
