//! Log entry writes.

use macrolog_core::api::ApiClient;
use macrolog_core::models::LogRequest;

use crate::events::UiEvent;

/// Adds a new entry, or replaces `log_id` when editing.
pub async fn submit_log(api: ApiClient, log_id: Option<i64>, request: LogRequest) -> UiEvent {
    let result = match log_id {
        Some(id) => api.update_log(id, &request).await,
        None => api.add_log(&request).await,
    };
    match result {
        Ok(()) => UiEvent::LogSubmitted { log_id },
        Err(err) => UiEvent::LogSubmitFailed {
            error: err.to_string(),
        },
    }
}

pub async fn delete_log(api: ApiClient, log_id: i64) -> UiEvent {
    match api.delete_log(log_id).await {
        Ok(()) => UiEvent::LogDeleted { log_id },
        Err(err) => UiEvent::LogDeleteFailed {
            error: err.to_string(),
        },
    }
}
