//! HTTP front end for the Four Pillars engine.
//!
//! The solar-term index is loaded once at startup and shared read-only; if
//! the load fails the process exits instead of serving without data.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use saju_engine::{BirthMoment, FourPillars, PillarOutcome, four_pillars};
use saju_terms::SolarTermIndex;

#[derive(Parser)]
#[command(name = "saju-server", about = "Four Pillars HTTP API")]
struct Args {
    /// Path to the solar-term table (JSON)
    #[arg(long, default_value = "solar_terms_db.json")]
    terms: PathBuf,
    /// Port to listen on
    #[arg(long, default_value = "5000")]
    port: u16,
}

#[derive(Clone)]
struct AppState {
    terms: Arc<SolarTermIndex>,
}

#[derive(Deserialize)]
struct CalculateQuery {
    date: Option<String>,
    time: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// One pillar slot: either the resolved pairing or its failure reason.
#[derive(Serialize)]
#[serde(untagged)]
enum PillarSlot {
    Resolved {
        stem: String,
        branch: String,
        label: String,
    },
    Failed {
        error: String,
    },
}

impl From<&PillarOutcome> for PillarSlot {
    fn from(outcome: &PillarOutcome) -> Self {
        match outcome {
            Ok(g) => Self::Resolved {
                stem: g.stem().hanja().to_string(),
                branch: g.branch().hanja().to_string(),
                label: g.label(),
            },
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct PillarsBody {
    year: PillarSlot,
    month: PillarSlot,
    day: PillarSlot,
    hour: PillarSlot,
}

impl From<&FourPillars> for PillarsBody {
    fn from(p: &FourPillars) -> Self {
        Self {
            year: PillarSlot::from(&p.year),
            month: PillarSlot::from(&p.month),
            day: PillarSlot::from(&p.day),
            hour: PillarSlot::from(&p.hour),
        }
    }
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    terms: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "saju_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    info!("loading solar-term table from {}", args.terms.display());
    let terms = SolarTermIndex::load(&args.terms)?;
    if let Some((first, last)) = terms.coverage() {
        info!("loaded {} term events, {first} to {last}", terms.len());
    }

    let state = AppState {
        terms: Arc::new(terms),
    };
    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", get(calculate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        terms: state.terms.len(),
    })
}

async fn calculate(
    State(state): State<AppState>,
    Query(query): Query<CalculateQuery>,
) -> Result<Json<PillarsBody>, (StatusCode, Json<ErrorBody>)> {
    let date = query
        .date
        .ok_or_else(|| bad_request("missing query parameter 'date'"))?;
    let time = query
        .time
        .ok_or_else(|| bad_request("missing query parameter 'time'"))?;
    let moment = parse_moment(&date, &time).map_err(|msg| bad_request(&msg))?;

    let pillars = four_pillars(&moment, &state.terms);
    Ok(Json(PillarsBody::from(&pillars)))
}

/// Combine the query parameters into a birth moment.
fn parse_moment(date: &str, time: &str) -> Result<BirthMoment, String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{date}', expected YYYY-MM-DD"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| format!("invalid time '{time}', expected HH:MM"))?;
    Ok(BirthMoment::new(date, time))
}

fn bad_request(msg: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody { error: msg.into() }),
    )
}
