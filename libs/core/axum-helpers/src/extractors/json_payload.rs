use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejection keeps axum's status but uses the API error body.
///
/// Invalid JSON is 400, a wrong content type 415, and a well-formed document
/// that does not fit `T` (missing `name`, wrong types) 422.
///
/// ```ignore
/// async fn create(JsonPayload(payload): JsonPayload<CreateItem>) -> impl IntoResponse { .. }
/// ```
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonPayload(value)),
            Err(rejection) => Err(AppError::from(rejection).into_response()),
        }
    }
}
