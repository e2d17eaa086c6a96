//! Route handlers. Each one authorizes, takes the registry lock, and calls into the library.

use super::{ApiError, SharedState};
use crate::logic::{
    bracket_rounds, matches_in_round, next_round_pairings, parse_percentile, roster_query,
    validate_bracket, Action, BracketRound, Resource,
};
use crate::models::{NewCoach, NewMatch, NewPlayer, NewRound, NewTeam};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct LoginResponse {
    token: uuid::Uuid,
}

/// `?team=<id>&percentile=<p>`, kept as text so bad values give a 400 with our message.
#[derive(Deserialize)]
struct PlayerQuery {
    team: Option<String>,
    percentile: Option<String>,
}

/// `?round=<id>`
#[derive(Deserialize)]
struct MatchQuery {
    round: Option<String>,
}

#[derive(Serialize)]
struct Pairing {
    host_team: u32,
    guest_team: u32,
}

#[derive(Serialize)]
struct BracketResponse {
    rounds: Vec<BracketRound>,
    valid: bool,
    problem: Option<String>,
}

/// A query value left blank (`?percentile=`) counts as absent.
fn query_value(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn parse_id(name: &str, raw: &str) -> Result<u32, ApiError> {
    raw.trim().parse().map_err(|_| {
        ApiError::BadRequest(format!(
            "Invalid query param {}={:?}: expected an integer id",
            name, raw
        ))
    })
}

#[get("/btms_api/health/")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "btms",
    })
}

// ---- auth ---------------------------------------------------------------

#[post("/btms_api/login/")]
async fn api_login(state: SharedState, body: Json<LoginBody>) -> ApiResult {
    let token = state.login(body.username.trim(), &body.password)?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

#[get("/btms_api/logout/")]
async fn api_logout(state: SharedState, req: HttpRequest) -> ApiResult {
    let (token, _) = state.session(&req)?;
    state.logout(token)?;
    Ok(HttpResponse::Ok().finish())
}

// ---- teams --------------------------------------------------------------

#[get("/btms_api/teams/")]
async fn api_list_teams(state: SharedState, req: HttpRequest) -> ApiResult {
    state.authorize(&req, Resource::Teams, Action::List)?;
    let teams = state.read()?.teams();
    Ok(HttpResponse::Ok().json(teams))
}

#[post("/btms_api/teams/")]
async fn api_create_team(state: SharedState, req: HttpRequest, body: Json<NewTeam>) -> ApiResult {
    state.authorize(&req, Resource::Teams, Action::Create)?;
    let team = state.write()?.insert_team(body.into_inner())?;
    Ok(HttpResponse::Created().json(team))
}

#[get("/btms_api/teams/{id}/")]
async fn api_get_team(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Teams, Action::Retrieve)?;
    let team = state.read()?.team(*id)?.clone();
    Ok(HttpResponse::Ok().json(team))
}

#[put("/btms_api/teams/{id}/")]
async fn api_update_team(
    state: SharedState,
    req: HttpRequest,
    id: Path<u32>,
    body: Json<NewTeam>,
) -> ApiResult {
    state.authorize(&req, Resource::Teams, Action::Update)?;
    let team = state.write()?.update_team(*id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(team))
}

#[delete("/btms_api/teams/{id}/")]
async fn api_delete_team(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Teams, Action::Delete)?;
    state.write()?.delete_team(*id)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- coaches ------------------------------------------------------------

#[get("/btms_api/coaches/")]
async fn api_list_coaches(state: SharedState, req: HttpRequest) -> ApiResult {
    state.authorize(&req, Resource::Coaches, Action::List)?;
    let coaches = state.read()?.coaches();
    Ok(HttpResponse::Ok().json(coaches))
}

#[post("/btms_api/coaches/")]
async fn api_create_coach(state: SharedState, req: HttpRequest, body: Json<NewCoach>) -> ApiResult {
    state.authorize(&req, Resource::Coaches, Action::Create)?;
    let coach = state.write()?.insert_coach(body.into_inner())?;
    Ok(HttpResponse::Created().json(coach))
}

#[get("/btms_api/coaches/{id}/")]
async fn api_get_coach(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Coaches, Action::Retrieve)?;
    let coach = state.read()?.coach(*id)?.clone();
    Ok(HttpResponse::Ok().json(coach))
}

#[put("/btms_api/coaches/{id}/")]
async fn api_update_coach(
    state: SharedState,
    req: HttpRequest,
    id: Path<u32>,
    body: Json<NewCoach>,
) -> ApiResult {
    state.authorize(&req, Resource::Coaches, Action::Update)?;
    let coach = state.write()?.update_coach(*id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(coach))
}

#[delete("/btms_api/coaches/{id}/")]
async fn api_delete_coach(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Coaches, Action::Delete)?;
    state.write()?.delete_coach(*id)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- players ------------------------------------------------------------

/// List players, optionally narrowed to one team and then to a score percentile within it.
#[get("/btms_api/players/")]
async fn api_list_players(
    state: SharedState,
    req: HttpRequest,
    query: Query<PlayerQuery>,
) -> ApiResult {
    state.authorize(&req, Resource::Players, Action::List)?;
    let team = query_value(&query.team)
        .map(|raw| parse_id("team", raw))
        .transpose()?;
    let percentile = query_value(&query.percentile)
        .map(parse_percentile)
        .transpose()?;
    let players = roster_query(&state.read()?.players(), team, percentile)?;
    Ok(HttpResponse::Ok().json(players))
}

#[post("/btms_api/players/")]
async fn api_create_player(
    state: SharedState,
    req: HttpRequest,
    body: Json<NewPlayer>,
) -> ApiResult {
    state.authorize(&req, Resource::Players, Action::Create)?;
    let player = state.write()?.insert_player(body.into_inner())?;
    Ok(HttpResponse::Created().json(player))
}

#[get("/btms_api/players/{id}/")]
async fn api_get_player(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Players, Action::Retrieve)?;
    let player = state.read()?.player(*id)?.clone();
    Ok(HttpResponse::Ok().json(player))
}

#[put("/btms_api/players/{id}/")]
async fn api_update_player(
    state: SharedState,
    req: HttpRequest,
    id: Path<u32>,
    body: Json<NewPlayer>,
) -> ApiResult {
    state.authorize(&req, Resource::Players, Action::Update)?;
    let player = state.write()?.update_player(*id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(player))
}

#[delete("/btms_api/players/{id}/")]
async fn api_delete_player(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Players, Action::Delete)?;
    state.write()?.delete_player(*id)?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- rounds -------------------------------------------------------------

#[get("/btms_api/rounds/")]
async fn api_list_rounds(state: SharedState, req: HttpRequest) -> ApiResult {
    state.authorize(&req, Resource::Rounds, Action::List)?;
    let rounds = state.read()?.rounds();
    Ok(HttpResponse::Ok().json(rounds))
}

#[post("/btms_api/rounds/")]
async fn api_create_round(state: SharedState, req: HttpRequest, body: Json<NewRound>) -> ApiResult {
    state.authorize(&req, Resource::Rounds, Action::Create)?;
    let round = state.write()?.insert_round(body.into_inner())?;
    Ok(HttpResponse::Created().json(round))
}

#[get("/btms_api/rounds/{id}/")]
async fn api_get_round(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Rounds, Action::Retrieve)?;
    let round = state.read()?.round(*id)?.clone();
    Ok(HttpResponse::Ok().json(round))
}

#[put("/btms_api/rounds/{id}/")]
async fn api_update_round(
    state: SharedState,
    req: HttpRequest,
    id: Path<u32>,
    body: Json<NewRound>,
) -> ApiResult {
    state.authorize(&req, Resource::Rounds, Action::Update)?;
    let round = state.write()?.update_round(*id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(round))
}

#[delete("/btms_api/rounds/{id}/")]
async fn api_delete_round(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Rounds, Action::Delete)?;
    state.write()?.delete_round(*id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Pairings for the round after `id`, from its matches in `match_no` order.
#[get("/btms_api/rounds/{id}/next-pairings/")]
async fn api_next_pairings(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::List)?;
    let registry = state.read()?;
    registry.round(*id)?;
    let mut matches = matches_in_round(&registry.matches(), *id);
    matches.sort_by_key(|m| (m.match_no, m.id));
    let pairings: Vec<Pairing> = next_round_pairings(&matches)?
        .into_iter()
        .map(|(host_team, guest_team)| Pairing {
            host_team,
            guest_team,
        })
        .collect();
    Ok(HttpResponse::Ok().json(pairings))
}

// ---- matches ------------------------------------------------------------

#[get("/btms_api/matches/")]
async fn api_list_matches(
    state: SharedState,
    req: HttpRequest,
    query: Query<MatchQuery>,
) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::List)?;
    let round = query_value(&query.round)
        .map(|raw| parse_id("round", raw))
        .transpose()?;
    let all = state.read()?.matches();
    let matches = match round {
        Some(round) => matches_in_round(&all, round),
        None => all,
    };
    Ok(HttpResponse::Ok().json(matches))
}

#[post("/btms_api/matches/")]
async fn api_create_match(state: SharedState, req: HttpRequest, body: Json<NewMatch>) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::Create)?;
    let m = state.write()?.insert_match(body.into_inner())?;
    Ok(HttpResponse::Created().json(m))
}

#[get("/btms_api/matches/{id}/")]
async fn api_get_match(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::Retrieve)?;
    let m = state.read()?.match_by_id(*id)?.clone();
    Ok(HttpResponse::Ok().json(m))
}

#[put("/btms_api/matches/{id}/")]
async fn api_update_match(
    state: SharedState,
    req: HttpRequest,
    id: Path<u32>,
    body: Json<NewMatch>,
) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::Update)?;
    let m = state.write()?.update_match(*id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(m))
}

#[delete("/btms_api/matches/{id}/")]
async fn api_delete_match(state: SharedState, req: HttpRequest, id: Path<u32>) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::Delete)?;
    state.write()?.delete_match(*id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Whole bracket by round, with the result of validating its progression.
#[get("/btms_api/bracket/")]
async fn api_bracket(state: SharedState, req: HttpRequest) -> ApiResult {
    state.authorize(&req, Resource::Matches, Action::List)?;
    let registry = state.read()?;
    let problem = validate_bracket(&registry).err().map(|e| e.to_string());
    Ok(HttpResponse::Ok().json(BracketResponse {
        rounds: bracket_rounds(&registry),
        valid: problem.is_none(),
        problem,
    }))
}

pub(super) fn register(cfg: &mut ServiceConfig) {
    cfg.service(api_health)
        .service(api_login)
        .service(api_logout)
        .service(api_list_teams)
        .service(api_create_team)
        .service(api_get_team)
        .service(api_update_team)
        .service(api_delete_team)
        .service(api_list_coaches)
        .service(api_create_coach)
        .service(api_get_coach)
        .service(api_update_coach)
        .service(api_delete_coach)
        .service(api_list_players)
        .service(api_create_player)
        .service(api_get_player)
        .service(api_update_player)
        .service(api_delete_player)
        .service(api_list_rounds)
        .service(api_create_round)
        .service(api_get_round)
        .service(api_update_round)
        .service(api_delete_round)
        .service(api_next_pairings)
        .service(api_list_matches)
        .service(api_create_match)
        .service(api_get_match)
        .service(api_update_match)
        .service(api_delete_match)
        .service(api_bracket);
}
