//! HTTP basic authentication for the API scope.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, web};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use subtle::ConstantTimeEq;

use crate::dto::ErrorResponse;
use crate::models::config::BasicAuthConfig;

const REALM: &str = "Basic realm=\"Authorization Required\"";

/// Proof that the request carried the configured credentials.
///
/// Add it as the first handler argument so it is checked before the body is
/// read. The expected pair is taken from `web::Data<BasicAuthConfig>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicAuthUser;

/// Split an `Authorization` header value into username and password.
fn decode_credentials(header_value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn matches(config: &BasicAuthConfig, username: &str, password: &str) -> bool {
    let username_ok = username.as_bytes().ct_eq(config.username.as_bytes());
    let password_ok = password.as_bytes().ct_eq(config.password.as_bytes());
    (username_ok & password_ok).into()
}

fn unauthorized() -> Error {
    let response = HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, REALM))
        .json(ErrorResponse::new("Unauthorized"));
    InternalError::from_response("unauthorized", response).into()
}

impl FromRequest for BasicAuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<BasicAuthConfig>>() else {
            log::error!("BasicAuthConfig is not registered as app data");
            return ready(Err(unauthorized()));
        };

        let credentials = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(decode_credentials);

        ready(match credentials {
            Some((username, password)) if matches(config, &username, &password) => {
                Ok(BasicAuthUser)
            }
            _ => Err(unauthorized()),
        })
    }
}
