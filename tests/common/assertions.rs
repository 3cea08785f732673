//! Custom assertions for gateway responses

use aaa_gateway::server::middleware::AUTH_TIME_HEADER;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

/// Assert an error response and return its message
pub async fn assert_error<B: MessageBody>(response: ServiceResponse<B>, status: u16) -> String {
    assert_eq!(response.status().as_u16(), status);

    let body: Value = test::read_body_json(response).await;
    let message = body["error"]["message"]
        .as_str()
        .expect("error responses carry a message");
    assert!(body["error"]["code"].is_string());
    assert!(body["error"]["timestamp"].is_i64());
    message.to_string()
}

/// Assert the authentication time header and return its value
pub fn assert_auth_time<B>(response: &ServiceResponse<B>) -> f64 {
    let value = response
        .headers()
        .get(AUTH_TIME_HEADER)
        .expect("x-auth-time header")
        .to_str()
        .expect("ASCII header")
        .parse::<f64>()
        .expect("float seconds");
    assert!(value >= 0.0);
    value
}
