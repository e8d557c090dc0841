use actix_web::{web, HttpResponse, Responder};
use common::requests::ClientConfig;

/// Actix web handler for `GET /api/config`.
pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
