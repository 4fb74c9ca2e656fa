//! JSON extractor that runs `validator` rules after deserialization.
//!
//! Both serde rejections (missing/ill-typed fields) and validation
//! failures map to 400 with a message naming the offending field, so a
//! handler taking `ValidatedJson<T>` only ever sees well-formed input.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_rejection(rejection: &JsonRejection) -> anyhow::Error {
    let body_text = rejection.body_text();

    if body_text.contains("missing field") {
        let field = body_text
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return anyhow!("{} is required", field);
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return anyhow!("Missing 'Content-Type: application/json' header");
    }

    anyhow!("Invalid request body")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(format_rejection(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
