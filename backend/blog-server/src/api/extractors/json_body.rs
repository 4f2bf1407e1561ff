use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// `Json<T>` whose rejections render as 400 `{"message": ...}`
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
            }
        }
    }
}
