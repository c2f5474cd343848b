use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::errors::AppError;

/// Extractor for the acting user's id, taken from the `X-User-Id` header.
/// This is the seam where a real identity layer (session, JWT, gateway
/// header) would plug in; the handlers only ever see a validated UUID.
/// Usage: add `user: AuthUser` as a parameter to your handler function.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let header = req
            .headers()
            .get("X-User-Id")
            .and_then(|v| v.to_str().ok());

        match header {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => ready(Ok(AuthUser(id))),
                Err(_) => ready(Err(AppError::BadRequest(
                    "X-User-Id header is not a valid UUID".into(),
                ))),
            },
            None => ready(Err(AppError::BadRequest(
                "Missing X-User-Id header".into(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_rt::test]
    async fn extracts_valid_uuid_header() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header(("X-User-Id", id.to_string()))
            .to_http_request();

        let user = AuthUser::extract(&req).await.unwrap();
        assert_eq!(user.0, id);
    }

    #[actix_rt::test]
    async fn rejects_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert!(AuthUser::extract(&req).await.is_err());
    }

    #[actix_rt::test]
    async fn rejects_malformed_uuid() {
        let req = TestRequest::default()
            .insert_header(("X-User-Id", "not-a-uuid"))
            .to_http_request();
        assert!(AuthUser::extract(&req).await.is_err());
    }
}
