//! Whole pipeline scenarios

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_auth_time, assert_error};
    use crate::common::fixtures::{LOCAL_LOGIN, LOCAL_PASSWORD, SERVICE, secure_authorization};
    use aaa_gateway::{Config, HttpServer};
    use actix_web::http::StatusCode;
    use actix_web::{HttpResponse, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(central_url: &str) -> Config {
        Config::from_yaml(&format!(
            r#"
logging:
  level: debug
auth:
  service: "{service}"
  hosts: ["{service}"]
  autonomous:
    login: "{login}"
    password: "{password}"
  central:
    auth_url: "{central_url}"
    timeout: 5
"#,
            service = SERVICE,
            login = LOCAL_LOGIN,
            password = LOCAL_PASSWORD,
            central_url = central_url,
        ))
        .unwrap()
    }

    /// `/hosts/` listing counting its calls
    fn mount(calls: Arc<AtomicUsize>) -> impl Fn(&mut web::ServiceConfig) + Clone {
        move |cfg: &mut web::ServiceConfig| {
            let calls = Arc::clone(&calls);
            cfg.route(
                "/hosts/",
                web::get().to(move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    async { HttpResponse::Ok().json(json!(["/hosts/a", "/hosts/b", "/other/c"])) }
                }),
            );
        }
    }

    fn signed_listing(login: &str, password: &str) -> test::TestRequest {
        test::TestRequest::get()
            .uri("/hosts/")
            .insert_header(("Host", SERVICE))
            .insert_header((
                "Authorization",
                secure_authorization(login, password, "GET", "/hosts/"),
            ))
    }

    #[actix_web::test]
    async fn test_local_signature_reaches_handler_once() {
        let central = MockServer::start().await;
        let config = config(&format!("{}/auth/authorization/", central.uri()));
        let server = HttpServer::new(&config).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let app = test::init_service(HttpServer::create_app(
            server.plugin().clone(),
            config.auth().public_paths.clone(),
            mount(Arc::clone(&calls)),
        ))
        .await;

        let resp = test::call_service(
            &app,
            signed_listing(LOCAL_LOGIN, LOCAL_PASSWORD).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_auth_time(&resp);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["/hosts/a", "/hosts/b", "/other/c"]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_central_permissions_filter_listing() {
        let central = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/authorization/"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!([
                {"host": "*", "methods": ["GET"], "path": "/hosts/*"},
            ])))
            .expect(1)
            .mount(&central)
            .await;

        let config = config(&format!("{}/auth/authorization/", central.uri()));
        let server = HttpServer::new(&config).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let app = test::init_service(HttpServer::create_app(
            server.plugin().clone(),
            config.auth().public_paths.clone(),
            mount(Arc::clone(&calls)),
        ))
        .await;

        let resp = test::call_service(&app, signed_listing("someone", "secret").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["/hosts/a", "/hosts/b"]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_rejection_never_reaches_handler() {
        let central = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&central)
            .await;

        let config = config(&format!("{}/auth/authorization/", central.uri()));
        let server = HttpServer::new(&config).unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let app = test::init_service(HttpServer::create_app(
            server.plugin().clone(),
            config.auth().public_paths.clone(),
            mount(Arc::clone(&calls)),
        ))
        .await;

        let resp = test::call_service(
            &app,
            signed_listing(LOCAL_LOGIN, "not the password").to_request(),
        )
        .await;
        assert_eq!(assert_error(resp, 403).await, "Access denied");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let resp = test::call_service(&app, signed_listing("someone", "secret").to_request()).await;
        assert_eq!(assert_error(resp, 403).await, "Access denied");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
