//! Single binary admin server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, FETCH_DELAY_MS.

use actix_files::Files;
use actix_web::{
    delete, error::InternalError, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::RwLock;
use std::time::Duration;
use tournament_admin_web::{
    filter_tournaments_by_status, filter_venues_by_status, tournaments_csv, venues_csv,
    AdminError, Catalog, ServerConfig, Tournament, TournamentForm, TournamentId, TournamentStatus,
    Venue, VenueForm, VenueId, VenueStatus,
};

/// In-memory catalog shared by all workers. Lost on restart.
type AppState = Data<RwLock<Catalog>>;

/// Simulated network latency for single-entity fetches.
#[derive(Clone, Copy)]
struct FetchDelay(Duration);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Listing page query: `?search=...&status=...`
#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    search: String,
    status: Option<String>,
}

#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct VenuePath {
    id: VenueId,
}

fn error_response(e: &AdminError) -> HttpResponse {
    let builder = match e {
        AdminError::Validation(_) => HttpResponse::BadRequest(),
        AdminError::TournamentNotFound(_) | AdminError::VenueNotFound(_) => HttpResponse::NotFound(),
        AdminError::VenueInUse { .. } => HttpResponse::Conflict(),
        AdminError::Export(_) => HttpResponse::InternalServerError(),
    };
    json_error(builder, e.to_string())
}

/// `{"error": ...}` with the given status builder.
fn json_error(mut builder: actix_web::HttpResponseBuilder, message: impl Into<String>) -> HttpResponse {
    builder.json(serde_json::json!({ "error": message.into() }))
}

/// Malformed bodies, queries and path ids answer with the same `{"error"}` shape as domain errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = json_error(HttpResponse::BadRequest(), err.to_string());
        InternalError::from_response(err, resp).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let resp = json_error(HttpResponse::BadRequest(), err.to_string());
        InternalError::from_response(err, resp).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let resp = json_error(HttpResponse::NotFound(), "Not found");
        InternalError::from_response(err, resp).into()
    })
}

/// Optional `?status=` value; blank means no filter, unknown values are a 400.
fn parse_status<S: FromStr<Err = String>>(raw: Option<&str>) -> Result<Option<S>, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s
            .parse::<S>()
            .map(Some)
            .map_err(|e| json_error(HttpResponse::BadRequest(), e)),
        None => Ok(None),
    }
}

fn tournament_listing<'a>(
    catalog: &'a Catalog,
    search: &str,
    status: Option<TournamentStatus>,
) -> Vec<&'a Tournament> {
    let list = catalog.list_tournaments(search);
    match status {
        Some(status) => filter_tournaments_by_status(list, status),
        None => list,
    }
}

fn venue_listing<'a>(catalog: &'a Catalog, search: &str, status: Option<VenueStatus>) -> Vec<&'a Venue> {
    let list = catalog.list_venues(search);
    match status {
        Some(status) => filter_venues_by_status(list, status),
        None => list,
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn csv_response(csv: String, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(csv)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-admin-web",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List tournaments, optionally filtered by search term and status.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    let status = match parse_status::<TournamentStatus>(query.status.as_deref()) {
        Ok(status) => status,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(tournament_listing(&g, &query.search, status))
}

/// CSV of the listing as currently filtered (same `search`/`status` query).
#[get("/api/tournaments/export.csv")]
async fn api_export_tournaments(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    let status = match parse_status::<TournamentStatus>(query.status.as_deref()) {
        Ok(status) => status,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match tournaments_csv(tournament_listing(&g, &query.search, status)) {
        Ok(csv) => csv_response(csv, "tournaments.csv"),
        Err(e) => error_response(&e),
    }
}

/// Create a tournament from the form (400 with the first validation message on failure).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentForm>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.create_tournament(&body) {
        Ok(t) => {
            log::info!("Created tournament {} ({})", t.name, t.id);
            HttpResponse::Created().json(t)
        }
        Err(e) => {
            log::debug!("Rejected tournament form: {}", e);
            error_response(&e)
        }
    }
}

/// Get a tournament by id, after the simulated fetch delay.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(
    state: AppState,
    delay: Data<FetchDelay>,
    path: Path<TournamentPath>,
) -> HttpResponse {
    actix_web::rt::time::sleep(delay.0).await;
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_tournament(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Edit page load: the tournament as form state.
#[get("/api/tournaments/{id}/form")]
async fn api_tournament_form(
    state: AppState,
    delay: Data<FetchDelay>,
    path: Path<TournamentPath>,
) -> HttpResponse {
    actix_web::rt::time::sleep(delay.0).await;
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_tournament(path.id) {
        Ok(t) => HttpResponse::Ok().json(TournamentForm::from_tournament(t)),
        Err(e) => error_response(&e),
    }
}

#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentForm>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_tournament(path.id, &body) {
        Ok(t) => {
            log::info!("Updated tournament {} ({})", t.name, t.id);
            HttpResponse::Ok().json(t)
        }
        Err(e) => {
            log::debug!("Rejected tournament update {}: {}", path.id, e);
            error_response(&e)
        }
    }
}

#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.delete_tournament(path.id) {
        Ok(t) => {
            log::info!("Deleted tournament {} ({})", t.name, t.id);
            HttpResponse::Ok().json(t)
        }
        Err(e) => error_response(&e),
    }
}

/// List venues, optionally filtered by search term (name or city) and status.
#[get("/api/venues")]
async fn api_list_venues(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    let status = match parse_status::<VenueStatus>(query.status.as_deref()) {
        Ok(status) => status,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(venue_listing(&g, &query.search, status))
}

#[get("/api/venues/export.csv")]
async fn api_export_venues(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    let status = match parse_status::<VenueStatus>(query.status.as_deref()) {
        Ok(status) => status,
        Err(resp) => return resp,
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match venues_csv(venue_listing(&g, &query.search, status)) {
        Ok(csv) => csv_response(csv, "venues.csv"),
        Err(e) => error_response(&e),
    }
}

#[post("/api/venues")]
async fn api_create_venue(state: AppState, body: Json<VenueForm>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.create_venue(&body) {
        Ok(v) => {
            log::info!("Created venue {} ({})", v.name, v.id);
            HttpResponse::Created().json(v)
        }
        Err(e) => {
            log::debug!("Rejected venue form: {}", e);
            error_response(&e)
        }
    }
}

#[get("/api/venues/{id}")]
async fn api_get_venue(
    state: AppState,
    delay: Data<FetchDelay>,
    path: Path<VenuePath>,
) -> HttpResponse {
    actix_web::rt::time::sleep(delay.0).await;
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_venue(path.id) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => error_response(&e),
    }
}

#[get("/api/venues/{id}/form")]
async fn api_venue_form(
    state: AppState,
    delay: Data<FetchDelay>,
    path: Path<VenuePath>,
) -> HttpResponse {
    actix_web::rt::time::sleep(delay.0).await;
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_venue(path.id) {
        Ok(v) => HttpResponse::Ok().json(VenueForm::from_venue(v)),
        Err(e) => error_response(&e),
    }
}

#[put("/api/venues/{id}")]
async fn api_update_venue(
    state: AppState,
    path: Path<VenuePath>,
    body: Json<VenueForm>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_venue(path.id, &body) {
        Ok(v) => {
            log::info!("Updated venue {} ({})", v.name, v.id);
            HttpResponse::Ok().json(v)
        }
        Err(e) => {
            log::debug!("Rejected venue update {}: {}", path.id, e);
            error_response(&e)
        }
    }
}

/// Delete a venue (409 while it still has matches).
#[delete("/api/venues/{id}")]
async fn api_delete_venue(state: AppState, path: Path<VenuePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.delete_venue(path.id) {
        Ok(v) => {
            log::info!("Deleted venue {} ({})", v.name, v.id);
            HttpResponse::Ok().json(v)
        }
        Err(e) => {
            log::info!("Refused to delete venue {}: {}", path.id, e);
            error_response(&e)
        }
    }
}

/// JSON API: extractor error shapes plus every `/api` service.
fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(api_health)
        // export routes before /{id} so "export.csv" is not taken for an id
        .service(api_export_tournaments)
        .service(api_list_tournaments)
        .service(api_create_tournament)
        .service(api_tournament_form)
        .service(api_get_tournament)
        .service(api_update_tournament)
        .service(api_delete_tournament)
        .service(api_export_venues)
        .service(api_list_venues)
        .service(api_create_venue)
        .service(api_venue_form)
        .service(api_get_venue)
        .service(api_update_venue)
        .service(api_delete_venue);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!(
        "Starting server at http://{}:{} (fetch delay {:?})",
        config.host,
        config.port,
        config.fetch_delay
    );

    let state = Data::new(RwLock::new(Catalog::seeded()));
    let delay = Data::new(FetchDelay(config.fetch_delay));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(delay.clone())
            .route("/", web::get().to(serve_index_async))
            .service(favicon)
            .configure(api_routes)
            .service(Files::new("/static", "static"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    /// Service over `catalog` with no fetch delay.
    macro_rules! test_app {
        ($catalog:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new(RwLock::new($catalog)))
                    .app_data(Data::new(FetchDelay(Duration::ZERO)))
                    .configure(api_routes),
            )
            .await
        };
    }

    fn venue_body(capacity: &str) -> serde_json::Value {
        serde_json::json!({ "name": "Arena", "city": "Oslo", "capacity": capacity, "status": "active" })
    }

    #[actix_web::test]
    async fn create_returns_201_with_entity() {
        let app = test_app!(Catalog::new());
        let req = test::TestRequest::post()
            .uri("/api/venues")
            .set_json(venue_body("500"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let venue: Venue = test::read_body_json(resp).await;
        assert_eq!(venue.capacity, 500);
        assert_eq!(venue.match_count, 0);
    }

    #[actix_web::test]
    async fn validation_failure_is_400_with_message() {
        let app = test_app!(Catalog::new());
        let req = test::TestRequest::post()
            .uri("/api/tournaments")
            .set_json(serde_json::json!({
                "name": "A", "start_date": "2023-05-01", "end_date": "2023-04-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "End date must be after start date");

        let req = test::TestRequest::post()
            .uri("/api/venues")
            .set_json(venue_body("-5"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], "Capacity must be a positive number");
    }

    #[actix_web::test]
    async fn malformed_body_is_400_json() {
        let app = test_app!(Catalog::new());
        let req = test::TestRequest::post()
            .uri("/api/venues")
            .set_json(serde_json::json!({ "name": "Arena", "city": "Oslo", "capacity": 500 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("invalid type"));

        let req = test::TestRequest::post()
            .uri("/api/tournaments")
            .set_json(serde_json::json!({ "name": "Cup", "status": "bogus" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn unknown_or_malformed_id_is_404_json() {
        let app = test_app!(Catalog::seeded());
        let missing = uuid::Uuid::new_v4();
        for uri in [
            format!("/api/tournaments/{missing}"),
            format!("/api/venues/{missing}/form"),
            "/api/venues/not-a-uuid".to_string(),
        ] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert!(body["error"].is_string(), "{uri}");
        }
        let req = test::TestRequest::delete()
            .uri(&format!("/api/tournaments/{missing}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn venue_in_use_delete_is_409() {
        let catalog = Catalog::seeded();
        let busy = catalog.venues().iter().find(|v| v.match_count > 0).unwrap().id;
        let idle = catalog.venues().iter().find(|v| v.match_count == 0).unwrap().id;
        let app = test_app!(catalog);

        let req = test::TestRequest::delete().uri(&format!("/api/venues/{busy}")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Cannot delete a venue"));

        let req = test::TestRequest::delete().uri(&format!("/api/venues/{idle}")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn edit_form_load_then_put() {
        let catalog = Catalog::seeded();
        let id = catalog.tournaments()[0].id;
        let app = test_app!(catalog);

        let req = test::TestRequest::get()
            .uri(&format!("/api/tournaments/{id}/form"))
            .to_request();
        let mut form: TournamentForm = test::call_and_read_body_json(&app, req).await;
        assert_eq!(form.name, "Summer Championship");
        assert_eq!(form.start_date, "2023-06-15");

        form.name = "Summer Championship 2024".into();
        let req = test::TestRequest::put()
            .uri(&format!("/api/tournaments/{id}"))
            .set_json(&form)
            .to_request();
        let updated: Tournament = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Summer Championship 2024");

        form.end_date = String::new();
        let req = test::TestRequest::put()
            .uri(&format!("/api/tournaments/{id}"))
            .set_json(&form)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn listing_filters_by_search_and_status() {
        let app = test_app!(Catalog::seeded());
        let req = test::TestRequest::get()
            .uri("/api/tournaments?status=active")
            .to_request();
        let list: Vec<Tournament> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Spring League"]);

        let req = test::TestRequest::get()
            .uri("/api/venues?search=ARENA&status=inactive")
            .to_request();
        let list: Vec<Venue> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<_> = list.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["North Arena"]);

        let req = test::TestRequest::get()
            .uri("/api/venues?search=arena&status=active")
            .to_request();
        let list: Vec<Venue> = test::call_and_read_body_json(&app, req).await;
        assert!(list.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/tournaments?status=bogus")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unknown tournament status: bogus");
    }

    #[actix_web::test]
    async fn export_route_is_not_taken_for_an_id() {
        let app = test_app!(Catalog::seeded());
        let req = test::TestRequest::get()
            .uri("/api/tournaments/export.csv?search=winter")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/csv"));
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "id,name,location,start_date,end_date,status");
        assert!(lines[1].contains(",Winter Cup,North Arena,2022-12-01,2023-01-15,completed"));

        let req = test::TestRequest::get()
            .uri("/api/venues/export.csv?status=inactive")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("North Arena"));
    }

    #[actix_web::test]
    async fn index_page_wires_edit_and_status_filter() {
        let app = test::init_service(App::new().route("/", web::get().to(serve_index_async))).await;
        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("/${id}/form"));
        assert!(html.contains(r#"method: id ? "PUT" : "POST""#));
        assert!(html.contains(r#"id="t-status""#) && html.contains(r#"id="v-status""#));
        assert!(html.contains("/export.csv?${query}"));
    }
}
