//! # Client Configuration Service
//!
//! Tells the browser application where the supplier REST API lives. The
//! frontend reads this once on start-up; nothing else about the API is
//! proxied or cached by this server.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for configuration endpoints.
const API_PATH: &str = "/api";

/// Configures the `/api` scope.
///
/// *   **`GET /config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `ClientConfig` registered as app data.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use common::requests::ClientConfig;

    #[actix_web::test]
    async fn config_endpoint_returns_registered_settings() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig {
                    api_base_url: "http://localhost:3000/api".into(),
                }))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["api_base_url"], "http://localhost:3000/api");
    }

    #[actix_web::test]
    async fn unknown_api_path_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/groups").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
