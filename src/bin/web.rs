//! Web adapter over the in-memory store: players, matches, standings and pairings via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Pairing policy comes from SWISS_ALLOW_BYES, SWISS_AVOID_REMATCHES, SWISS_REMATCH_WINDOW,
//! SWISS_INTEGRITY.

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use swiss_tournament::{
    player_standings, register_player, report_match, swiss_pairings, write_standings_csv,
    InMemoryStore, PairingConfig, PlayerId, ServerConfig, TournamentError, TournamentStore,
};

/// One logical tournament per process.
struct AppState {
    store: InMemoryStore,
    config: PairingConfig,
}

type State = Data<AppState>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

/// Path segment: player id (e.g. /api/players/{id}/matches)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownPlayer(_) => HttpResponse::NotFound().json(body),
        TournamentError::ReferentialIntegrity { .. } | TournamentError::StoreUnavailable => {
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn respond<T: serde::Serialize>(result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// List registered players in registration order.
#[get("/api/players")]
async fn api_list_players(state: State) -> HttpResponse {
    respond(state.store.list_players())
}

#[get("/api/players/count")]
async fn api_count_players(state: State) -> HttpResponse {
    respond(state.store.count_players().map(|count| CountResponse { count }))
}

/// Register a player (name trimmed, must be non-empty).
#[post("/api/players")]
async fn api_add_player(state: State, body: Json<AddPlayerBody>) -> HttpResponse {
    respond(register_player(&state.store, &body.name))
}

/// Remove every player and, with them, every match.
#[delete("/api/players")]
async fn api_clear_players(state: State) -> HttpResponse {
    match state.store.clear_players() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Matches one player took part in (404 if the player is not registered).
#[get("/api/players/{id}/matches")]
async fn api_player_matches(state: State, path: Path<PlayerPath>) -> HttpResponse {
    match state.store.get_player(path.id) {
        Ok(Some(_)) => respond(state.store.list_matches_for_player(path.id)),
        Ok(None) => error_response(&TournamentError::UnknownPlayer(path.id)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/matches")]
async fn api_list_matches(state: State) -> HttpResponse {
    respond(state.store.list_matches())
}

/// Report a result: winner and loser must be distinct registered players.
#[post("/api/matches")]
async fn api_report_match(state: State, body: Json<ReportMatchBody>) -> HttpResponse {
    respond(report_match(&state.store, body.winner, body.loser))
}

#[delete("/api/matches")]
async fn api_clear_matches(state: State) -> HttpResponse {
    match state.store.clear_matches() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: State) -> HttpResponse {
    respond(player_standings(&state.store, &state.config))
}

#[get("/api/standings.csv")]
async fn api_standings_csv(state: State) -> HttpResponse {
    let mut buf = Vec::new();
    let result = player_standings(&state.store, &state.config)
        .and_then(|rows| write_standings_csv(&rows, &mut buf));
    match result {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(buf),
        Err(e) => error_response(&e),
    }
}

/// Pairings for the next round (pairs plus an optional bye).
#[get("/api/pairings")]
async fn api_pairings(state: State) -> HttpResponse {
    respond(swiss_pairings(&state.store, &state.config))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server = ServerConfig::from_env();
    let config = PairingConfig::from_env();
    log::info!("Pairing policy: {:?}", config);
    log::info!("Starting server at http://{}:{}", server.host, server.port);

    let state = Data::new(AppState {
        store: InMemoryStore::new(),
        config,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_count_players)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_clear_players)
            .service(api_player_matches)
            .service(api_list_matches)
            .service(api_report_match)
            .service(api_clear_matches)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_pairings)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
