use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info, warn};
use crate::common::common::{parse_query, resolve_remote_ip};
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::encoder::{encode_announce, encode_failure, encode_scrape};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::error_class::ErrorClass;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::passkey::Passkey;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_no_passkey)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_no_passkey)));
        cfg.service(web::resource("/{passkey}/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/{passkey}/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads as usize;
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object),
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
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

pub async fn http_service_announce(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.torrent_tracker;
    match http_service_announce_handler(&request, path.as_str(), tracker).await {
        Ok(body) => http_service_bencode(StatusCode::OK, body),
        Err(error) => http_service_failure(tracker, error),
    }
}

async fn http_service_announce_handler(request: &HttpRequest, passkey: &str, tracker: &TorrentTracker) -> Result<Vec<u8>, TrackerError>
{
    let passkey = Passkey::new(passkey)?;
    let query = parse_query(Some(request.query_string()))?;
    let ip = http_service_remote_ip(request, &query, tracker)?;
    let announce = tracker.validate_announce(ip, &query)?;
    let (compact, no_peer_id) = (announce.compact, announce.no_peer_id);
    let result = tracker.handle_announce(announce, &passkey).await?;
    Ok(encode_announce(&result, compact, no_peer_id))
}

pub async fn http_service_scrape(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.torrent_tracker;
    match http_service_scrape_handler(&request, path.as_str(), tracker).await {
        Ok(body) => http_service_bencode(StatusCode::OK, body),
        Err(error) => http_service_failure(tracker, error),
    }
}

async fn http_service_scrape_handler(request: &HttpRequest, passkey: &str, tracker: &TorrentTracker) -> Result<Vec<u8>, TrackerError>
{
    let passkey = Passkey::new(passkey)?;
    let query = parse_query(Some(request.query_string()))?;
    let scrape = tracker.validate_scrape(&query)?;
    let files = tracker.handle_scrape(scrape, &passkey).await?;
    Ok(encode_scrape(&files))
}

pub async fn http_service_no_passkey(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_failure(&data.torrent_tracker, TrackerError::InvalidAuth)
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    debug!("[HTTP] Unknown request {} {}", request.method(), request.path());
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    http_service_failure(&data.torrent_tracker, TrackerError::InvalidReqType)
}

/// Client address: the `ip` query parameter, then the configured real-ip
/// header, then the connection peer.
pub fn http_service_remote_ip(request: &HttpRequest, query: &HashMap<String, Vec<Vec<u8>>>, tracker: &TorrentTracker) -> Result<IpAddr, TrackerError>
{
    let ip_param = query.get("ip").and_then(|values| values.first()).map(|value| value.as_slice());
    let forwarded_for = request.headers()
        .get(tracker.config.tracker_config.real_ip.as_str())
        .and_then(|header| header.to_str().ok());
    let connection_info = request.connection_info();
    resolve_remote_ip(ip_param, forwarded_for, connection_info.peer_addr())
}

pub fn http_service_failure(tracker: &TorrentTracker, error: TrackerError) -> HttpResponse
{
    match error.class() {
        ErrorClass::Validation => debug!("[HTTP] Rejected request: {error} ({})", error.code()),
        ErrorClass::Authorization => warn!("[HTTP] Unauthorized request: {error} ({})", error.code()),
        ErrorClass::RateLimit => debug!("[HTTP] Rate limited request ({})", error.code()),
        ErrorClass::Internal => error!("[HTTP] Internal failure: {}", error.detail().unwrap_or_default()),
    }
    tracker.update_stats(StatsEvent::Failures, 1);
    let status = StatusCode::from_u16(error.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    http_service_bencode(status, encode_failure(&error))
}

fn http_service_bencode(status: StatusCode, body: Vec<u8>) -> HttpResponse
{
    HttpResponse::build(status).content_type(ContentType::plaintext()).body(body)
}
