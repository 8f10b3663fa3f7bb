use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_service_info_hash, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::torrent_patch::TorrentPatch;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_torrent_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data) { return error_return; }

    let info_hash = match api_service_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(response) => return response,
    };

    match data.torrent_tracker.get_torrent_status(&info_hash) {
        None => api_service_unknown_info_hash(),
        Some(status) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "torrent": status
        })),
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_torrent_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data) { return error_return; }

    let info_hash = match api_service_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(response) => return response,
    };

    match data.torrent_tracker.delete_torrent(info_hash) {
        Ok(status) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "torrent": status
        })),
        Err(_) => api_service_unknown_info_hash(),
    }
}

/// Body: `{"enabled": bool, "downloaded": u64}`, both optional.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_torrent_patch(request: HttpRequest, path: web::Path<String>, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data) { return error_return; }

    let info_hash = match api_service_info_hash(&path.into_inner()) {
        Ok(info_hash) => info_hash,
        Err(response) => return response,
    };

    let patch = match serde_json::from_slice::<TorrentPatch>(&body) {
        Ok(patch) => patch,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad json body"})),
    };

    let status = data.torrent_tracker.update_torrent(info_hash, patch);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "torrent": status
    }))
}

fn api_service_unknown_info_hash() -> HttpResponse
{
    let error = TrackerError::InfoHashNotFound;
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": error.to_string(),
        "code": error.code()
    }))
}
