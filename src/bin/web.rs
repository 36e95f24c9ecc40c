//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Initial rules: COURT_TEAM_SIZE, COURT_WIN_STREAK_THRESHOLD, COURT_ROTATION_POLICY.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_rotation::{
    admit_player, declare_winner, end_championship_and_continue, generate_teams, remove_player,
    reset_app, start_match, update_settings, Court, PlayerId, RotationPolicy, Settings,
    SettingsUpdate, Side,
};
use serde::Deserialize;
use std::sync::RwLock;

/// The one court this server schedules.
type AppState = Data<RwLock<Court>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AdmitPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct DeclareWinnerBody {
    side: Side,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Apply an intent to the court and respond with the resulting state.
fn apply(state: &AppState, intent: impl FnOnce(&mut Court)) -> HttpResponse {
    let mut court = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    intent(&mut *court);
    HttpResponse::Ok().json(&*court)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-rotation",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full court state (roster, queues, match, reign, champion, rules).
#[get("/api/court")]
async fn api_get_court(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(court) => HttpResponse::Ok().json(&*court),
        Err(_) => lock_error(),
    }
}

/// Players ranked champions first, then wins, then streak.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(court) => HttpResponse::Ok().json(court.leaderboard()),
        Err(_) => lock_error(),
    }
}

/// Admit a player (blank names are ignored).
#[post("/api/players")]
async fn api_admit_player(state: AppState, body: Json<AdmitPlayerBody>) -> HttpResponse {
    apply(&state, |court| {
        admit_player(court, &body.name);
    })
}

/// Remove a player; cancels their match or dissolves their queued team.
#[delete("/api/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    apply(&state, |court| remove_player(court, path.player_id))
}

/// Merge partial rules; team size or policy changes requeue everyone.
#[put("/api/settings")]
async fn api_update_settings(state: AppState, body: Json<SettingsUpdate>) -> HttpResponse {
    let mut court = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match update_settings(&mut court, body.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(&*court),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[post("/api/teams/generate")]
async fn api_generate_teams(state: AppState) -> HttpResponse {
    apply(&state, generate_teams)
}

/// Manually trigger match formation when the court is idle.
#[post("/api/match/start")]
async fn api_start_match(state: AppState) -> HttpResponse {
    apply(&state, start_match)
}

#[post("/api/match/winner")]
async fn api_declare_winner(state: AppState, body: Json<DeclareWinnerBody>) -> HttpResponse {
    apply(&state, |court| declare_winner(court, body.side))
}

/// Dismiss the champion and reshuffle everyone into a new season.
#[post("/api/championship/continue")]
async fn api_continue_championship(state: AppState) -> HttpResponse {
    apply(&state, end_championship_and_continue)
}

/// Forget all players and game state; rules are kept.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    apply(&state, reset_app)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Initial rules from env, falling back to defaults for missing or invalid values.
fn settings_from_env() -> Settings {
    let defaults = Settings::default();
    let update = SettingsUpdate {
        team_size: std::env::var("COURT_TEAM_SIZE")
            .ok()
            .and_then(|v| v.parse().ok()),
        win_streak_threshold: std::env::var("COURT_WIN_STREAK_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok()),
        rotation_policy: std::env::var("COURT_ROTATION_POLICY")
            .ok()
            .and_then(|v| match v.parse::<RotationPolicy>() {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("{}; using default", e);
                    None
                }
            }),
    };
    if let Err(e) = update.validate() {
        log::warn!("Invalid court rules from env ({}); using defaults", e);
        return defaults;
    }
    let mut settings = defaults;
    update.apply_to(&mut settings);
    settings
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let settings = settings_from_env();
    log::info!(
        "Court rules: team size {}, {:?}, streak priority at {}",
        settings.team_size,
        settings.rotation_policy,
        settings.win_streak_threshold
    );
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Court::with_settings(settings)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_court)
            .service(api_leaderboard)
            .service(api_admit_player)
            .service(api_remove_player)
            .service(api_update_settings)
            .service(api_generate_teams)
            .service(api_start_match)
            .service(api_declare_winner)
            .service(api_continue_championship)
            .service(api_reset)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
