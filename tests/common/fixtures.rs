//! Test fixtures and data factories

use aaa_gateway::config::{AuthConfig, AutonomousConfig, CentralConfig};
use aaa_gateway::utils::auth::create_hmac_signature;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

/// Name and host of the service under test
pub const SERVICE: &str = "server.napix.nx";
/// Trusted local login
pub const LOCAL_LOGIN: &str = "local_master";
/// Shared secret of the trusted local login
pub const LOCAL_PASSWORD: &str = "s3cret";

/// `Authorization` value for the secure protocol
pub fn secure_authorization(login: &str, password: &str, method: &str, path: &str) -> String {
    let message = format!(
        "login={}&host={}&method={}&path={}&nonce=abc123",
        login,
        SERVICE,
        method,
        url_encode(path)
    );
    let signature = create_hmac_signature(password.as_bytes(), message.as_bytes())
        .expect("HMAC accepts any key");
    format!("{}:{}", message, signature)
}

/// Compact signed-claims token for a request
pub fn jwt_authorization(login: &str, password: &str, method: &str, path: &str) -> String {
    let claims = json!({
        "iss": login,
        "sub": format!("{} {}", method, path),
        "aud": SERVICE,
        "jti": "n1",
        "exp": 1234567,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(password.as_bytes()),
    )
    .expect("claims serialize")
}

fn url_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Factory for authentication configurations
pub struct AuthConfigFactory;

impl AuthConfigFactory {
    /// Secure protocol, host check, trusted local login
    pub fn local() -> AuthConfig {
        AuthConfig {
            service: SERVICE.to_string(),
            hosts: vec![SERVICE.to_string()],
            autonomous: Some(AutonomousConfig {
                login: LOCAL_LOGIN.to_string(),
                password: LOCAL_PASSWORD.to_string(),
            }),
            ..Default::default()
        }
    }

    /// [`Self::local`] delegating other logins to `url`
    pub fn central(url: &str) -> AuthConfig {
        AuthConfig {
            central: Some(CentralConfig {
                url: url.to_string(),
                timeout: 5,
            }),
            ..Self::local()
        }
    }
}
