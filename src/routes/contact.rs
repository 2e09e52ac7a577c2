use std::collections::BTreeMap;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use techfolks_inquiry::{
    BudgetRange, CodeTable, ContactMethod, ContactTime, Field, FormController, ProjectType,
    SubmissionOutcome, Timeline,
};

use crate::routes::AppState;

/// GET /contact/options - Select options for every coded field
pub async fn options() -> impl IntoResponse {
    Json(json!({
        "projectType": ProjectType::options(),
        "budgetRange": BudgetRange::options(),
        "timeline": Timeline::options(),
        "contactMethod": ContactMethod::options(),
        "bestTimeToContact": ContactTime::options(),
    }))
}

/// POST /contact - One form session: apply every field, then submit
pub async fn action(
    State(app_state): State<AppState>,
    Json(input): Json<BTreeMap<Field, String>>,
) -> Response {
    let controller = FormController::new(app_state.submitter.clone());

    let mut rejected = BTreeMap::new();
    for (field, value) in input {
        if let Err(err) = controller.on_field_change(field, value) {
            tracing::debug!(error = %err, "Inquiry field rejected");
            rejected.insert(field, "Please select a valid option");
        }
    }

    if !rejected.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"status": "invalid", "errors": rejected})),
        )
            .into_response();
    }

    let outcome = controller.submit().await;
    let status = match &outcome {
        SubmissionOutcome::Success => StatusCode::OK,
        SubmissionOutcome::Failure(_) => StatusCode::BAD_GATEWAY,
        SubmissionOutcome::Idle => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"status": "invalid", "errors": controller.errors()})),
            )
                .into_response();
        }
        // Fresh controller per request, so another submission cannot be in flight
        SubmissionOutcome::Pending => StatusCode::CONFLICT,
    };

    (status, Json(outcome)).into_response()
}
