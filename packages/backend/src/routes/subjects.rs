use axum::extract::State;
use axum::Json;
use pathwise_algo::Level;
use serde::Serialize;

use crate::response::{ok, SuccessResponse};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubjectSummary {
    name: String,
    levels: Vec<Level>,
}

pub async fn list(State(state): State<AppState>) -> Json<SuccessResponse<Vec<SubjectSummary>>> {
    let hierarchy = &state.reference().hierarchy;
    let subjects: Vec<SubjectSummary> = hierarchy
        .subjects()
        .map(|name| SubjectSummary {
            name: name.to_string(),
            levels: hierarchy.levels(name).to_vec(),
        })
        .collect();
    ok(subjects)
}
