//! Validating JSON extractor

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;
use shared::Schema;

use crate::error::AppError;

/// Drop-in replacement for `Json<T>` that runs the schema's normalization
/// and validation, rejecting with every field error at once.
///
/// ```ignore
/// async fn register(ValidatedJson(input): ValidatedJson<FarmerRegistration>) -> ... {
///     // input.mobile, input.otp and input.full_name are guaranteed valid
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Schema + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::MalformedBody(rejection.body_text()))?;

        let value = T::from_payload(&payload).map_err(|err| {
            tracing::debug!(
                rejected = err.errors.len(),
                fields = ?err.errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                "payload failed validation"
            );
            AppError::Validation(err)
        })?;

        Ok(Self(value))
    }
}
