//! Axum HTTP shell: the external randomness supplier for the game client.
//!
//! The server is stateless — it never owns a [`crate::game_session::GameSession`].
//! Clients fetch batches of face values here and feed them into
//! `DiceSet::apply_external_roll`; on any transport failure they fall back
//! to the local roll path. The engine clamps every supplied value on
//! entry, so nothing served here is trusted.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/roll-dices` | `count` random faces in [1,6] (count clamped to 1..=20, default 5) |

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::Query, routing::get, Json, Router};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::constants::DIE_FACES;

/// Most dice a single request may ask for.
const MAX_ROLL_COUNT: usize = 20;

/// Default when the `count` query parameter is absent or unparsable.
const DEFAULT_ROLL_COUNT: usize = 5;

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/roll-dices", get(handle_roll_dices))
        .layer(cors)
}

// ── Request/Response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct RollQuery {
    count: Option<usize>,
}

#[derive(Serialize)]
struct RollResponse {
    values: Vec<i32>,
    count: usize,
    timestamp: u64,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_roll_dices(Query(params): Query<RollQuery>) -> Json<RollResponse> {
    let count = params
        .count
        .unwrap_or(DEFAULT_ROLL_COUNT)
        .clamp(1, MAX_ROLL_COUNT);

    let mut rng = SmallRng::from_os_rng();
    let values: Vec<i32> = (0..count).map(|_| rng.random_range(1..=DIE_FACES)).collect();

    println!("Dice roll requested — count: {} | values: {:?}", count, values);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(RollResponse {
        values,
        count,
        timestamp,
    })
}
