//! Middleware integration tests
//!
//! Signed requests through `AuthMiddleware` with the chains built from
//! configuration.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{assert_auth_time, assert_error};
    use crate::common::fixtures::{
        AuthConfigFactory, LOCAL_LOGIN, LOCAL_PASSWORD, SERVICE, secure_authorization,
    };
    use aaa_gateway::auth::AaaPlugin;
    use aaa_gateway::config::AuthConfig;
    use aaa_gateway::server::AuthMiddleware;
    use aaa_gateway::server::middleware::get_authenticated_login;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn hosts(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(("x-login", get_authenticated_login(&req).unwrap_or_default()))
            .json(json!(["/hosts/a", "/hosts/b"]))
    }

    macro_rules! app {
        ($config:expr) => {{
            let config: AuthConfig = $config;
            let plugin = Arc::new(AaaPlugin::from_config(&config).unwrap());
            test::init_service(
                App::new()
                    .wrap(AuthMiddleware::new(plugin, config.public_paths.clone()))
                    .route("/hosts/", web::get().to(hosts))
                    .route("/hosts/", web::post().to(HttpResponse::Created)),
            )
            .await
        }};
    }

    fn get(path: &str) -> test::TestRequest {
        test::TestRequest::get()
            .uri(path)
            .insert_header(("Host", SERVICE))
    }

    #[actix_web::test]
    async fn test_local_signature() {
        let app = app!(AuthConfigFactory::local());
        let req = get("/hosts/")
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, LOCAL_PASSWORD, "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_auth_time(&resp);
        assert_eq!(resp.headers().get("x-login").unwrap(), LOCAL_LOGIN);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(["/hosts/a", "/hosts/b"]));
    }

    #[actix_web::test]
    async fn test_untimed() {
        let app = app!(AuthConfig {
            timed: false,
            ..AuthConfigFactory::local()
        });
        let req = get("/hosts/")
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, LOCAL_PASSWORD, "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("x-auth-time").is_none());
    }

    #[actix_web::test]
    async fn test_unsigned_request() {
        let app = app!(AuthConfigFactory::local());
        let resp = test::call_service(&app, get("/hosts/").to_request()).await;
        assert_eq!(
            assert_error(resp, 401).await,
            "You need to sign your request"
        );
    }

    #[actix_web::test]
    async fn test_missing_authentication_data() {
        let app = app!(AuthConfigFactory::local());
        let req = get("/hosts/")
            .insert_header(("Authorization", "login=local_master&path=/hosts/:abcdef"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(
            assert_error(resp, 403).await,
            "Missing authentication data: host, method"
        );
    }

    #[actix_web::test]
    async fn test_wrong_password() {
        let app = app!(AuthConfigFactory::local());
        let req = get("/hosts/")
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, "guess", "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(assert_error(resp, 403).await, "Access denied");
    }

    #[actix_web::test]
    async fn test_signature_for_another_method() {
        let app = app!(AuthConfigFactory::local());
        let req = test::TestRequest::post()
            .uri("/hosts/")
            .insert_header(("Host", SERVICE))
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, LOCAL_PASSWORD, "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(
            assert_error(resp, 403).await,
            "Bad authorization data method does not match"
        );
    }

    #[actix_web::test]
    async fn test_signature_for_another_host() {
        let app = app!(AuthConfigFactory::local());
        let req = test::TestRequest::get()
            .uri("/hosts/")
            .insert_header(("Host", "other.napix.nx"))
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, LOCAL_PASSWORD, "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(
            assert_error(resp, 403).await,
            "Bad authentication data host does not match"
        );
    }

    #[actix_web::test]
    async fn test_host_not_served() {
        let app = app!(AuthConfig {
            hosts: vec!["other.napix.nx".to_string()],
            ..AuthConfigFactory::local()
        });
        let req = get("/hosts/")
            .insert_header((
                "Authorization",
                secure_authorization(LOCAL_LOGIN, LOCAL_PASSWORD, "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(assert_error(resp, 403).await, "Bad host");
    }

    #[actix_web::test]
    async fn test_unknown_login_without_central() {
        let app = app!(AuthConfigFactory::local());
        let req = get("/hosts/")
            .insert_header((
                "Authorization",
                secure_authorization("someone", "secret", "GET", "/hosts/"),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(assert_error(resp, 403).await, "No provider could decide");
    }

    #[actix_web::test]
    async fn test_non_secure_token() {
        let mut config = AuthConfigFactory::local();
        config.protocols.non_secure = true;
        let app = app!(config);

        let signature = aaa_gateway::utils::auth::create_hmac_signature(
            LOCAL_PASSWORD.as_bytes(),
            LOCAL_LOGIN.as_bytes(),
        )
        .unwrap();
        let req = get(&format!("/hosts/?token={}:{}", LOCAL_LOGIN, signature)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = get("/hosts/?token=nocolon").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            assert_error(resp, 401).await,
            "Incorrect non-secure authentication"
        );
    }

    #[actix_web::test]
    async fn test_public_path() {
        let plugin = Arc::new(AaaPlugin::from_config(&AuthConfigFactory::local()).unwrap());
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(plugin, vec!["/_health".to_string()]))
                .route("/_health", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let resp = test::call_service(&app, get("/_health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
