use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use miette::Diagnostic;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AuthzError {
    /// The single authorization failure: the resolved query answered `false`.
    /// Fail-closed; absence of an explicit allow is a denial.
    #[error("not authorized")]
    #[diagnostic(
        code(palisade::not_authorized),
        help("The policy query answered false for this actor/record pair")
    )]
    NotAuthorized,

    #[error("invalid action path `{0}`")]
    #[diagnostic(
        code(palisade::invalid_action_path),
        help("Action paths need a resource and an action segment, e.g. \"Store::Books::Index\"")
    )]
    InvalidActionPath(String),

    #[error("no policy registered under `{0}`")]
    #[diagnostic(
        code(palisade::unknown_policy),
        help("Register the policy at startup: registry.register(\"<name>\", handler)")
    )]
    UnknownPolicy(String),

    #[error("no query named `{0}`")]
    #[diagnostic(
        code(palisade::unknown_query),
        help("Standard queries are index, show, create, new, update, edit, delete; custom names need a `query` override on the policy")
    )]
    UnknownQuery(String),

    #[error("record passed to `{policy}` is not a `{expected}`")]
    #[diagnostic(
        code(palisade::record_type_mismatch),
        help("The record type given to authorize must match the type the policy was registered with")
    )]
    RecordTypeMismatch {
        policy: String,
        expected: &'static str,
    },
}

impl IntoResponse for AuthzError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthzError::NotAuthorized => (StatusCode::FORBIDDEN, self.to_string()),
            // Everything else is a misconfiguration, not an authorization outcome
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
