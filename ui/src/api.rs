//! API client for the dynaform backend

use crate::types::*;
use gloo_net::http::Request;
use serde::Deserialize;

const API_BASE: &str = "/api";

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// List the forms the server knows about
pub async fn list_forms() -> Result<Vec<FormSummary>, String> {
    let url = format!("{}/forms", API_BASE);
    fetch_json::<Vec<FormSummary>>(&url).await
}

/// Fetch one form definition by name
pub async fn get_form(name: &str) -> Result<FormDefinition, String> {
    let url = format!("{}/forms/{}", API_BASE, urlencoding::encode(name));
    fetch_json::<FormDefinition>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
