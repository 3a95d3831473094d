//! Read-only form registry and its REST endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{FormDefinition, FormSummary};

/// Generic API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Form definitions keyed by name, in load order.
///
/// Built once at startup from validated `Settings`, so names are unique.
#[derive(Debug, Default)]
pub struct FormRegistry {
    forms: IndexMap<String, FormDefinition>,
}

impl FormRegistry {
    pub fn new(forms: Vec<FormDefinition>) -> Self {
        let forms = forms
            .into_iter()
            .map(|form| (form.name.clone(), form))
            .collect();
        Self { forms }
    }

    pub fn get(&self, name: &str) -> Option<&FormDefinition> {
        self.forms.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn summaries(&self) -> Vec<FormSummary> {
        self.forms.values().map(FormSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Shared state for the form endpoints
#[derive(Clone)]
pub struct FormApiState {
    pub registry: Arc<FormRegistry>,
}

/// GET /api/forms - List registered forms
pub async fn list_forms(State(state): State<FormApiState>) -> impl IntoResponse {
    Json(ApiResponse::success(state.registry.summaries()))
}

/// GET /api/forms/:name - Get one form definition
pub async fn get_form(
    State(state): State<FormApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.registry.get(&name) {
        Some(form) => (StatusCode::OK, Json(ApiResponse::success(form.clone()))),
        None => {
            tracing::debug!("Form '{}' requested but not registered", name);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<FormDefinition>::error(format!(
                    "Form not found: {}",
                    name
                ))),
            )
        }
    }
}
