use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use tracing::info;

use super::domain::{ApplicationId, ApplicationView};
use super::intake::ApplicationForm;
use super::registry::ApplicationRegistry;
use crate::config::parse_flag;

pub const APPLICATIONS_PATH: &str = "/api/v1/applications";

/// Vote parameters as posted by the swipe page.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteParams {
    #[serde(rename = "applicationId")]
    pub application_id: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub approve: bool,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("'{raw}' is not a boolean flag")))
}

/// Router builder exposing intake, listing, swipe, and voting endpoints.
pub fn application_router(registry: Arc<ApplicationRegistry>) -> Router {
    Router::new()
        .route(APPLICATIONS_PATH, post(submit_handler).get(list_handler))
        .route("/api/v1/applications/:application_id", get(detail_handler))
        .route("/api/v1/swipe", get(swipe_handler))
        .route("/api/v1/vote", post(vote_handler))
        .with_state(registry)
}

pub(crate) async fn submit_handler(
    State(registry): State<Arc<ApplicationRegistry>>,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    match ApplicationForm::bind(body).and_then(ApplicationForm::into_application) {
        Ok(application) => {
            let stored = registry.submit(application);
            info!(application_id = %stored.id(), "loan application submitted");
            (StatusCode::CREATED, axum::Json(stored.view())).into_response()
        }
        Err(errors) => (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(errors)).into_response(),
    }
}

pub(crate) async fn list_handler(State(registry): State<Arc<ApplicationRegistry>>) -> Response {
    let applications: Vec<ApplicationView> = registry
        .list_all()
        .iter()
        .map(|application| application.view())
        .collect();
    axum::Json(json!({ "applications": applications })).into_response()
}

pub(crate) async fn detail_handler(
    State(registry): State<Arc<ApplicationRegistry>>,
    Path(application_id): Path<String>,
) -> Response {
    match registry.get_by_id(&ApplicationId(application_id)) {
        Some(application) => axum::Json(application.view()).into_response(),
        None => Redirect::to(APPLICATIONS_PATH).into_response(),
    }
}

pub(crate) async fn swipe_handler(State(registry): State<Arc<ApplicationRegistry>>) -> Response {
    let payload = match registry.get_random() {
        Some(application) => json!({ "application": application.view() }),
        None => json!({ "no_applications": true }),
    };
    axum::Json(payload).into_response()
}

pub(crate) async fn vote_handler(
    State(registry): State<Arc<ApplicationRegistry>>,
    query: Option<Query<VoteParams>>,
    form: Option<Form<VoteParams>>,
) -> Response {
    // A form body wins over query parameters when both are present.
    let params = match (form, query) {
        (Some(Form(params)), _) | (None, Some(Query(params))) => params,
        (None, None) => {
            return (
                StatusCode::BAD_REQUEST,
                "applicationId and approve are required",
            )
                .into_response()
        }
    };

    registry.vote(&ApplicationId(params.application_id), params.approve);
    (StatusCode::OK, "success").into_response()
}
