use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    model::{
        leaderboard::{debug_entries, LeaderboardEntry},
        summoner::PlayerIdentity,
    },
    service::{
        aggregator::{AggregationError, Aggregator},
        gameapi::riot_api_client::RiotApi,
    },
};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared handler state. `api` is `None` when no Riot API key was configured.
pub struct AppState<C> {
    pub player: Arc<PlayerIdentity>,
    pub api: Option<Arc<C>>,
}

impl<C> AppState<C> {
    pub fn new(player: PlayerIdentity, api: Option<C>) -> Self {
        Self {
            player: Arc::new(player),
            api: api.map(Arc::new),
        }
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            player: Arc::clone(&self.player),
            api: self.api.clone(),
        }
    }
}

pub fn router<C: RiotApi + 'static>(state: AppState<C>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/leaderboard", get(get_leaderboard::<C>))
        .route("/api/leaderboard", get(get_leaderboard::<C>))
        .route("/heartbeat", get(heartbeat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub debug: Option<String>,
}

impl LeaderboardQuery {
    pub fn is_debug(&self) -> bool {
        matches!(self.debug.as_deref(), Some("1") | Some("true"))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

async fn get_leaderboard<C: RiotApi + 'static>(
    State(state): State<AppState<C>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AggregationError> {
    if params.is_debug() {
        info!("Serving canned debug leaderboard");
        return Ok(Json(debug_entries()));
    }

    let api = state.api.clone().ok_or(AggregationError::MissingCredential)?;
    let entry = Aggregator::new(api).build_entry(&state.player).await?;

    Ok(Json(vec![entry]))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn heartbeat() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

impl IntoResponse for AggregationError {
    fn into_response(self) -> Response {
        let status = match &self {
            AggregationError::UnsupportedRegion(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        warn!(%status, stage = ?self.stage(), error = %self, "Leaderboard request failed");

        (
            status,
            Json(ErrorResponse {
                ok: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
