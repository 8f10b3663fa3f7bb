use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_validation;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data) { return error_return; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.torrent_tracker.get_stats())
}
