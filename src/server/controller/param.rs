//! Request extractors and query parameter types.
//!
//! `ApiQuery` and `ApiPath` wrap axum's `Query` and `Path` so malformed parameters are
//! answered with the JSON `ErrorDto` body instead of axum's plain-text rejection.

use axum::extract::{FromRequestParts, Path, Query};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::server::error::AppError;

/// Query string extractor rejecting with `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path extractor rejecting with `AppError::BadRequest`.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// One-indexed page number (default 1).
    pub page: Option<i64>,
    /// Users per page, clamped to 1..=500 (default 50).
    pub per_page: Option<i64>,
    /// Substring matched against user name or email.
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityQuery {
    /// Window length in days, clamped to 1..=365 (default 7).
    pub days: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Maximum rows, clamped to 1..=500 (default 50).
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BotListQuery {
    /// Expand each bot's routes inline. A bare `include_routes` counts as true.
    #[serde(default, deserialize_with = "deserialize_flag")]
    #[param(value_type = Option<bool>)]
    pub include_routes: bool,
    /// Expand each bot's fleet composition inline.
    #[serde(default, deserialize_with = "deserialize_flag")]
    #[param(value_type = Option<bool>)]
    pub include_aircraft: bool,
}

/// Parses a boolean query flag.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` in any case; an empty value is true so
/// that `?include_routes` works as a bare flag.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean flag `{}`",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Option<BotListQuery> {
        let uri: axum::http::Uri = format!("/api/bots?{}", query).parse().unwrap();
        Query::<BotListQuery>::try_from_uri(&uri).ok().map(|q| q.0)
    }

    #[test]
    fn bare_flag_is_true() {
        let query = parse("include_routes").unwrap();
        assert!(query.include_routes);
        assert!(!query.include_aircraft);
    }

    #[test]
    fn explicit_values_are_parsed() {
        let query = parse("include_routes=false&include_aircraft=1").unwrap();
        assert!(!query.include_routes);
        assert!(query.include_aircraft);
    }

    #[test]
    fn rejects_unknown_flag_value() {
        assert!(parse("include_routes=maybe").is_none());
    }
}
