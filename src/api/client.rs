//! HTTP API Client
//!
//! One typed function per CivicDesk REST endpoint.

use gloo_net::http::{Request, Response};

use crate::api::types::{
    Alert, AnalyticsSnapshot, ChatReply, HistoryItem, IntakeReceipt, Session, StatusReport, Topic,
    DEFAULT_CITIZEN_ID,
};

/// Default API base URL, overridable at build time.
pub const DEFAULT_API_BASE: &str = match option_env!("CIVICDESK_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("civicdesk_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("civicdesk_api_url", url);
        }
    }
}

// ============ Error Handling ============

/// Turn a non-2xx response into the message shown to the user.
///
/// The backend reports failures as `{"detail": ...}` where `detail` is
/// usually a string but may be structured (validation errors). Anything
/// unreadable falls back to the HTTP status.
async fn failure_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    failure_from(status, &body)
}

fn failure_from(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(detail) if !detail.is_null() => return detail.to_string(),
            _ => {}
        }
    }
    format!("Request failed (HTTP {})", status)
}

// ============ API Functions ============

/// Log in with an existing account
pub async fn login(username: &str, password: &str) -> Result<Session, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new citizen account
pub async fn register(username: &str, email: &str, password: &str) -> Result<Session, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/register", api_base))
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a chat message and get the assistant's reply
pub async fn send_chat(message: &str) -> Result<ChatReply, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
        user_id: i64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
            user_id: DEFAULT_CITIZEN_ID,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// File a free-text complaint without the guided form
pub async fn create_complaint(text: &str, location: Option<&str>) -> Result<StatusReport, String> {
    #[derive(serde::Serialize)]
    struct ComplaintRequest {
        text: String,
        location: Option<String>,
        user_id: i64,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/complaint", api_base))
        .json(&ComplaintRequest {
            text: text.to_string(),
            location: location.map(str::to_string),
            user_id: DEFAULT_CITIZEN_ID,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit the guided intake form as multipart form data
///
/// The caller builds the `FormData` (text fields plus optional image) so
/// the browser sets the multipart boundary itself.
pub async fn submit_intake(form: web_sys::FormData) -> Result<IntakeReceipt, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/complaint/intake", api_base))
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the current state of a ticket
pub async fn fetch_status(ticket_id: &str) -> Result<StatusReport, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/status/{}", api_base, ticket_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a user's past chat interactions, newest first
pub async fn fetch_history(user_id: i64) -> Result<Vec<HistoryItem>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/history/{}", api_base, user_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the complaint-volume aggregate
pub async fn fetch_analytics() -> Result<AnalyticsSnapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch topic-model highlights across all complaints
pub async fn fetch_topics() -> Result<Vec<Topic>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/topics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch hotspot alerts for the last seven days
pub async fn fetch_alerts() -> Result<Vec<Alert>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/alerts", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(failure_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_prefers_string_detail() {
        let msg = failure_from(404, r#"{"detail": "Ticket not found"}"#);
        assert_eq!(msg, "Ticket not found");
    }

    #[test]
    fn test_failure_renders_structured_detail() {
        let msg = failure_from(
            422,
            r#"{"detail": [{"loc": ["body", "problem"], "msg": "field required"}]}"#,
        );
        assert!(msg.contains("field required"));
    }

    #[test]
    fn test_failure_falls_back_to_status() {
        assert_eq!(failure_from(502, "<html>bad gateway</html>"), "Request failed (HTTP 502)");
        assert_eq!(failure_from(500, ""), "Request failed (HTTP 500)");
        assert_eq!(failure_from(500, r#"{"detail": null}"#), "Request failed (HTTP 500)");
    }
}
