use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::{request::RequestError, Error};

/// JSON request body bound to a payload type.
///
/// Works like [`axum::Json`] but rejects with [`RequestError`] so that a body which is JSON
/// but not a valid payload is echoed back to the client with a 400. Fields the payload
/// doesn't bind are ignored.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| RequestError::MalformedBody(rejection.body_text()))?;

        if !payload.is_object() {
            return Err(RequestError::InvalidPayload {
                payload,
                reason: "expected a JSON object".to_string(),
            }
            .into());
        }

        match serde_json::from_value::<T>(payload.clone()) {
            Ok(value) => Ok(Payload(value)),
            Err(err) => Err(RequestError::InvalidPayload {
                payload,
                reason: err.to_string(),
            }
            .into()),
        }
    }
}
