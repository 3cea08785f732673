//! Configuration integration tests
//!
//! A configuration file loaded from disk builds a working pipeline.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_error;
    use crate::common::fixtures::SERVICE;
    use aaa_gateway::{Config, HttpServer};
    use actix_web::http::StatusCode;
    use actix_web::{HttpResponse, test, web};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONFIG: &str = r#"
auth:
  service: "server.napix.nx"
  hosts: ["server.napix.nx"]
  protocols:
    anonymous: true
  autonomous:
    password: "s3cret"
  global_permissions:
    - host: "*"
      methods: GET
      path: "/"
"#;

    async fn load(content: &str) -> aaa_gateway::Result<Config> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Config::from_file(file.path()).await
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/", web::get().to(HttpResponse::Ok))
            .route("/hosts/", web::get().to(HttpResponse::Ok));
    }

    #[tokio::test]
    async fn test_loaded_config_builds_the_chains() {
        let config = load(CONFIG).await.unwrap();
        let server = HttpServer::new(&config).unwrap();

        assert_eq!(
            server.plugin().source_names(),
            vec!["secure", "anonymous"]
        );
        assert_eq!(
            server.plugin().provider_names(),
            vec!["request-parameters", "host", "global-permissions", "autonomous"]
        );
    }

    #[actix_web::test]
    async fn test_global_permissions_from_file() {
        let config = load(CONFIG).await.unwrap();
        let server = HttpServer::new(&config).unwrap();
        let app = test::init_service(HttpServer::create_app(
            server.plugin().clone(),
            config.auth().public_paths.clone(),
            routes,
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Host", SERVICE))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/hosts/")
            .insert_header(("Host", SERVICE))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(assert_error(resp, 403).await, "No provider could decide");
    }

    #[tokio::test]
    async fn test_invalid_files_are_rejected() {
        let missing_password = r#"
auth:
  autonomous:
    password: ""
"#;
        assert!(load(missing_password).await.is_err());

        let central_without_service = r#"
auth:
  central:
    auth_url: "http://auth.napix.nx/auth/authorization/"
"#;
        assert!(load(central_without_service).await.is_err());

        let no_protocol = r#"
auth:
  protocols:
    secure: false
"#;
        assert!(load(no_protocol).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        assert!(Config::from_file("/nonexistent/gateway.yaml").await.is_err());
    }
}
