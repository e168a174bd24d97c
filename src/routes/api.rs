use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::search::SearchParams;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::health::check_store;
use crate::services::search::search;

#[get("/search")]
pub async fn api_search(
    params: web::Query<SearchParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match search(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err, server_config.expose_error_details),
    }
}

#[get("/health")]
pub async fn api_health(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let health = check_store(repo.get_ref(), server_config.expose_error_details);
    if health.is_healthy() {
        HttpResponse::Ok().json(health)
    } else {
        HttpResponse::ServiceUnavailable().json(health)
    }
}
