//! Single binary web server: landing page from templates/, static from
//! /static, API via REST. Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use racha_league_web::{
    add_event, available_months, champion_tally, current_month_key, filter_by_month,
    filter_by_position, finish_match, general_ranking, goalkeeper_ranking, group_standings,
    match_winner, remove_event, set_goalkeepers, set_penalties, start_tournament, top_assists,
    top_scorers, tournament_event_totals, EventKind, Phase, Player, Position, Status, Store,
    TournamentData, TournamentError, TournamentId,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory copy of the persisted state: registry, current tournament,
/// archive. Mutated under the lock and written back as whole snapshots.
struct LeagueState {
    players: Vec<Player>,
    current: Option<TournamentData>,
    history: Vec<TournamentData>,
}

type AppState = Data<RwLock<LeagueState>>;

const DEFAULT_TOURNAMENT_NAME: &str = "Racha League";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Which tournaments an aggregation covers.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Scope {
    Current,
    #[default]
    Annual,
}

#[derive(Deserialize)]
struct CreatePlayerBody {
    name: String,
    position: Position,
}

#[derive(Deserialize)]
struct UpdatePlayerBody {
    name: String,
    position: Position,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: Option<String>,
    #[serde(default = "default_team_count")]
    team_count: u8,
}

fn default_team_count() -> u8 {
    4
}

#[derive(Deserialize)]
struct TeamCountBody {
    team_count: u8,
}

#[derive(Deserialize)]
struct AssignPlayerBody {
    player_id: Uuid,
}

#[derive(Deserialize)]
struct AddEventBody {
    kind: EventKind,
    team_id: Uuid,
    player_id: Uuid,
}

#[derive(Deserialize)]
struct GoalkeepersBody {
    home_goalkeeper_id: Option<Uuid>,
    away_goalkeeper_id: Option<Uuid>,
}

#[derive(Deserialize)]
struct PenaltiesBody {
    penalty_home: u32,
    penalty_away: u32,
}

#[derive(Deserialize)]
struct RenameBody {
    name: String,
}

#[derive(Deserialize)]
struct ScopeQuery {
    #[serde(default)]
    scope: Scope,
}

#[derive(Deserialize)]
struct MonthlyQuery {
    month: Option<String>,
    position: Position,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: Uuid,
}

/// Path segment: team id (e.g. /api/tournament/teams/{team_id}/players)
#[derive(Deserialize)]
struct TeamPath {
    team_id: Uuid,
}

/// Path segments: team id and player id
#[derive(Deserialize)]
struct TeamPlayerPath {
    team_id: Uuid,
    player_id: Uuid,
}

#[derive(Deserialize)]
struct MatchPath {
    match_id: Uuid,
}

#[derive(Deserialize)]
struct MatchEventPath {
    match_id: Uuid,
    event_id: Uuid,
}

/// Path segment: archived tournament id
#[derive(Deserialize)]
struct HistoryPath {
    id: TournamentId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn storage_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Failed to persist" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn no_tournament() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": "No current tournament" }))
}

/// Tournament set for an aggregation scope: history plus current, or just
/// the current one.
fn tournament_set<'a>(state: &'a LeagueState, scope: Scope) -> Vec<&'a TournamentData> {
    let mut set: Vec<&TournamentData> = Vec::new();
    if matches!(scope, Scope::Annual) {
        set.extend(state.history.iter());
    }
    set.extend(state.current.iter());
    set
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "racha-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

// --- Player registry ---

#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(&g.players)
}

/// Register a new player.
#[post("/api/players")]
async fn api_add_player(state: AppState, store: Data<Store>, body: Json<CreatePlayerBody>) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.players.push(Player::new(name, body.position));
    if !store.save_players(&g.players) {
        g.players.pop();
        return storage_error();
    }
    HttpResponse::Ok().json(&g.players)
}

/// Rename or reposition a player.
#[put("/api/players/{id}")]
async fn api_update_player(
    state: AppState,
    store: Data<Store>,
    path: Path<PlayerPath>,
    body: Json<UpdatePlayerBody>,
) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(player) = g.players.iter_mut().find(|p| p.id == path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    };
    player.name = name.to_string();
    player.position = body.position;
    if !store.save_players(&g.players) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.players)
}

/// Delete a player from the registry. Also purges them from the rosters of a
/// draft tournament; active and archived tournaments keep their historical
/// references.
#[delete("/api/players/{id}")]
async fn api_delete_player(state: AppState, store: Data<Store>, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let before = g.players.len();
    g.players.retain(|p| p.id != path.id);
    if g.players.len() == before {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" }));
    }
    if !store.save_players(&g.players) {
        return storage_error();
    }
    let purged = match g.current.as_mut() {
        Some(t) => t.purge_player(path.id),
        None => false,
    };
    if purged && !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.players)
}

// --- Current tournament ---

/// The current tournament, or null when none exists.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(&g.current)
}

/// Create a fresh draft. Replaces an existing draft; an active tournament
/// must be archived first.
#[post("/api/tournament")]
async fn api_create_tournament(
    state: AppState,
    store: Data<Store>,
    body: Option<Json<CreateTournamentBody>>,
) -> HttpResponse {
    let (name, team_count) = match body.as_ref() {
        Some(b) => (
            b.name.clone().unwrap_or_else(|| DEFAULT_TOURNAMENT_NAME.to_string()),
            b.team_count,
        ),
        None => (DEFAULT_TOURNAMENT_NAME.to_string(), default_team_count()),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if matches!(g.current.as_ref(), Some(t) if t.status == Status::Active) {
        return bad_request(TournamentError::InvalidState);
    }
    let tournament = match TournamentData::new_draft(name, team_count) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    g.current = Some(tournament);
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Switch a draft between 4 and 5 teams. Rebuilds the draft, dropping any
/// roster assignments made so far.
#[put("/api/tournament/team-count")]
async fn api_set_team_count(
    state: AppState,
    store: Data<Store>,
    body: Json<TeamCountBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let name = match g.current.as_ref() {
        Some(t) if t.status == Status::Draft => t.name.clone(),
        Some(_) => return bad_request(TournamentError::InvalidState),
        None => return no_tournament(),
    };
    let tournament = match TournamentData::new_draft(name, body.team_count) {
        Ok(t) => t,
        Err(e) => return bad_request(e),
    };
    g.current = Some(tournament);
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Put a player on a team (draft only).
#[post("/api/tournament/teams/{team_id}/players")]
async fn api_assign_player(
    state: AppState,
    store: Data<Store>,
    path: Path<TeamPath>,
    body: Json<AssignPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match t.assign_player(path.team_id, body.player_id) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Take a player off a team (draft only).
#[delete("/api/tournament/teams/{team_id}/players/{player_id}")]
async fn api_unassign_player(
    state: AppState,
    store: Data<Store>,
    path: Path<TeamPlayerPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match t.unassign_player(path.team_id, path.player_id) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Generate the group schedule and start play (draft -> active).
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState, store: Data<Store>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match start_tournament(t) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

// --- Match ledger ---

/// Record a match event; scores are recomputed from the ledger.
#[post("/api/tournament/matches/{match_id}/events")]
async fn api_add_event(
    state: AppState,
    store: Data<Store>,
    path: Path<MatchPath>,
    body: Json<AddEventBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match add_event(t, path.match_id, body.kind, body.team_id, body.player_id) {
        Ok(_) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Remove a match event by id; scores are recomputed from the ledger.
#[delete("/api/tournament/matches/{match_id}/events/{event_id}")]
async fn api_remove_event(
    state: AppState,
    store: Data<Store>,
    path: Path<MatchEventPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match remove_event(t, path.match_id, path.event_id) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Assign the goalkeepers for a match (guest keepers allowed).
#[put("/api/tournament/matches/{match_id}/goalkeepers")]
async fn api_set_goalkeepers(
    state: AppState,
    store: Data<Store>,
    path: Path<MatchPath>,
    body: Json<GoalkeepersBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match set_goalkeepers(t, path.match_id, body.home_goalkeeper_id, body.away_goalkeeper_id) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Record the penalty shootout of a final.
#[put("/api/tournament/matches/{match_id}/penalties")]
async fn api_set_penalties(
    state: AppState,
    store: Data<Store>,
    path: Path<MatchPath>,
    body: Json<PenaltiesBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match set_penalties(t, path.match_id, body.penalty_home, body.penalty_away) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Mark a match finished. When that completes a stage, the next phase's
/// fixtures appear in the same response.
#[post("/api/tournament/matches/{match_id}/finish")]
async fn api_finish_match(state: AppState, store: Data<Store>, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_mut() else {
        return no_tournament();
    };
    match finish_match(t, path.match_id) {
        Ok(()) => {}
        Err(e) => return bad_request(e),
    }
    if !store.save_current(g.current.as_ref()) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.current)
}

/// Close the current tournament and move it into the archive.
#[post("/api/tournament/archive")]
async fn api_archive_tournament(state: AppState, store: Data<Store>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.take() else {
        return no_tournament();
    };
    if t.status != Status::Active {
        g.current = Some(t);
        return bad_request(TournamentError::InvalidState);
    }
    let LeagueState { current, history, .. } = &mut *g;
    if !store.archive_tournament(t.clone(), history) {
        *current = Some(t);
        return storage_error();
    }
    log::info!("Archived tournament ({} total in history)", g.history.len());
    HttpResponse::Ok().json(g.history.last())
}

// --- Standings & history ---

/// Group-stage standings of the current tournament.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.current.as_ref() else {
        return no_tournament();
    };
    HttpResponse::Ok().json(group_standings(t))
}

#[get("/api/history")]
async fn api_list_history(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    // Newest first: archive date, falling back to creation date.
    let mut list: Vec<&TournamentData> = g.history.iter().collect();
    list.sort_by_key(|t| std::cmp::Reverse(t.finished_at.unwrap_or(t.created_at)));
    HttpResponse::Ok().json(list)
}

/// Rename an archived tournament.
#[put("/api/history/{id}/name")]
async fn api_rename_history(
    state: AppState,
    store: Data<Store>,
    path: Path<HistoryPath>,
    body: Json<RenameBody>,
) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(entry) = g.history.iter().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such tournament" }));
    };
    let mut updated = entry.clone();
    updated.name = name.to_string();
    let LeagueState { history, .. } = &mut *g;
    if !store.update_history_entry(history, updated) {
        return storage_error();
    }
    HttpResponse::Ok().json(g.history.iter().find(|t| t.id == path.id))
}

/// Delete an archived tournament outright. This is the only way match
/// records ever leave the system.
#[delete("/api/history/{id}")]
async fn api_delete_history(state: AppState, store: Data<Store>, path: Path<HistoryPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.history.iter().any(|t| t.id == path.id) {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such tournament" }));
    }
    let LeagueState { history, .. } = &mut *g;
    if !store.delete_history_entry(history, path.id) {
        return storage_error();
    }
    HttpResponse::Ok().json(&g.history)
}

/// Archive summary: final standings, champion and per-player event totals.
#[get("/api/history/{id}/summary")]
async fn api_history_summary(state: AppState, path: Path<HistoryPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(t) = g.history.iter().find(|t| t.id == path.id) else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "No such tournament" }));
    };
    let champion_team_id = t
        .matches
        .iter()
        .find(|m| m.phase == Phase::Final && m.finished)
        .and_then(match_winner);
    HttpResponse::Ok().json(serde_json::json!({
        "tournament": t,
        "standings": group_standings(t),
        "champion_team_id": champion_team_id,
        "event_totals": tournament_event_totals(t),
    }))
}

// --- Rankings ---

/// General ranking (roster attribution), current tournament or full archive.
#[get("/api/rankings/general")]
async fn api_general_ranking(state: AppState, query: Query<ScopeQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let set = tournament_set(&g, query.scope);
    HttpResponse::Ok().json(general_ranking(&set, &g.players))
}

/// Positional leaderboard for one calendar month. Goalkeepers are ranked by
/// match assignment, every other position by team roster.
#[get("/api/rankings/monthly")]
async fn api_monthly_ranking(state: AppState, query: Query<MonthlyQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let month = query
        .month
        .clone()
        .unwrap_or_else(current_month_key);
    let set = tournament_set(&g, Scope::Annual);
    let in_month = filter_by_month(&set, &month);
    let rows = if query.position == Position::Goalkeeper {
        goalkeeper_ranking(&in_month)
    } else {
        general_ranking(&in_month, &g.players)
    };
    HttpResponse::Ok().json(filter_by_position(rows, &g.players, query.position))
}

/// Months selectable in the monthly leaderboards.
#[get("/api/rankings/months")]
async fn api_available_months(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(available_months(&g.history))
}

/// All-time goalkeeper ranking (assignment attribution, registered
/// goalkeepers only).
#[get("/api/rankings/goalkeepers")]
async fn api_goalkeeper_ranking(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let set = tournament_set(&g, Scope::Annual);
    let rows = goalkeeper_ranking(&set);
    HttpResponse::Ok().json(filter_by_position(rows, &g.players, Position::Goalkeeper))
}

#[get("/api/rankings/scorers")]
async fn api_top_scorers(state: AppState, query: Query<ScopeQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let set = tournament_set(&g, query.scope);
    HttpResponse::Ok().json(top_scorers(&set))
}

#[get("/api/rankings/assists")]
async fn api_top_assists(state: AppState, query: Query<ScopeQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let set = tournament_set(&g, query.scope);
    HttpResponse::Ok().json(top_assists(&set))
}

/// Titles per player over the archive.
#[get("/api/rankings/champions")]
async fn api_champions(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(champion_tally(&g.history))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
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

    let store = Store::from_env();
    let players = store.load_players();
    let current = store.load_current();
    let history = store.load_history();
    log::info!(
        "Loaded {} player(s), current tournament: {}, {} archived",
        players.len(),
        current.is_some(),
        history.len()
    );
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(LeagueState {
        players,
        current,
        history,
    }));
    let store = Data::new(store);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_delete_player)
            .service(api_get_tournament)
            .service(api_create_tournament)
            .service(api_set_team_count)
            .service(api_assign_player)
            .service(api_unassign_player)
            .service(api_start_tournament)
            .service(api_add_event)
            .service(api_remove_event)
            .service(api_set_goalkeepers)
            .service(api_set_penalties)
            .service(api_finish_match)
            .service(api_archive_tournament)
            .service(api_standings)
            .service(api_list_history)
            .service(api_rename_history)
            .service(api_delete_history)
            .service(api_history_summary)
            .service(api_general_ranking)
            .service(api_monthly_ranking)
            .service(api_available_months)
            .service(api_goalkeeper_ranking)
            .service(api_top_scorers)
            .service(api_top_assists)
            .service(api_champions)
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
