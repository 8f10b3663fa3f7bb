use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info, warn};
use serde_json::json;
use crate::api::api_stats::api_service_stats_get;
use crate::api::api_torrents::{api_service_torrent_delete, api_service_torrent_get, api_service_torrent_patch};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::config::structs::api_trackers_config::ApiTrackersConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "PATCH", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/tracker/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("/torrent/{info_hash}")
            .route(web::get().to(api_service_torrent_get))
            .route(web::delete().to(api_service_torrent_delete))
            .route(web::patch().to(api_service_torrent_patch))
        );
        cfg.default_service(web::route().to(api_service_not_found));
    })
}

pub fn api_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    api_server_object: ApiTrackersConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    let keep_alive = api_server_object.keep_alive;
    let request_timeout = api_server_object.request_timeout;
    let disconnect_timeout = api_server_object.disconnect_timeout;
    let worker_threads = api_server_object.threads as usize;
    let service_data = Arc::new(ApiServiceData {
        torrent_tracker: data,
        api_trackers_config: Arc::new(api_server_object),
    });

    info!("[API] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Counts the request and checks its `token` against the API key.
/// Returns the response to send when the request must be refused.
pub fn api_validation(request: &HttpRequest, data: &ApiServiceData) -> Option<HttpResponse>
{
    data.torrent_tracker.update_stats(StatsEvent::ApiHandled, 1);
    let token = web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|params| params.into_inner().token);
    api_service_token(token.as_deref(), &data.torrent_tracker.config.tracker_config.api_key)
}

pub fn api_service_token(token: Option<&str>, api_key: &str) -> Option<HttpResponse>
{
    match token {
        None => {
            debug!("[API] Request without token");
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) if token_code != api_key => {
            warn!("[API] Request with an invalid token");
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "invalid token"
            })))
        }
        Some(_) => None,
    }
}

/// Parses a 40 character hex info hash from the path.
pub fn api_service_info_hash(info: &str) -> Result<InfoHash, HttpResponse>
{
    if info.len() != 40 {
        return Err(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad info_hash"})));
    }
    info.parse::<InfoHash>()
        .map_err(|_| HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "invalid info_hash"})))
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    debug!("[API] Unknown request {} {}", request.method(), request.path());
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
