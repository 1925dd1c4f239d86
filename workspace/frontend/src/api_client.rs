//! Async facade over the [`CookbookStore`](model::CookbookStore).
//!
//! Every call waits out a configurable delay before touching the store so
//! the views go through the same loading states a real backend would cause.
//! Errors come back as display-ready strings.

pub mod challenge;
pub mod learning_plan;
pub mod profile;
pub mod recipe;

use serde::Serialize;
use crate::settings;

async fn simulate_delay(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

fn to_message(method: &str, endpoint: &str, err: model::ModelError) -> String {
    let error_msg = err.to_string();
    log::error!("{} {} - {}", method, endpoint, error_msg);
    error_msg
}

/// Common read handler
pub async fn get<T, F>(endpoint: &str, read: F) -> Result<T, String>
where
    F: FnOnce() -> model::Result<T>,
{
    log::debug!("GET request to: {}", endpoint);
    simulate_delay(settings::get_settings().simulated_latency_ms).await;

    let data = read().map_err(|e| to_message("GET", endpoint, e))?;
    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common write handler. The body is only logged; the store decides what
/// happens to it.
pub async fn send<T, B, F>(method: &str, endpoint: &str, body: &B, write: F) -> Result<T, String>
where
    B: Serialize,
    F: FnOnce(&B) -> model::Result<T>,
{
    match serde_json::to_string(body) {
        Ok(json) => log::debug!("{} request to: {} body: {}", method, endpoint, json),
        Err(e) => log::warn!("{} request to: {} (body not serializable: {})", method, endpoint, e),
    }
    simulate_delay(settings::get_settings().submit_delay_ms).await;

    let data = write(body).map_err(|e| to_message(method, endpoint, e))?;
    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

pub async fn post<T, B, F>(endpoint: &str, body: &B, write: F) -> Result<T, String>
where
    B: Serialize,
    F: FnOnce(&B) -> model::Result<T>,
{
    send("POST", endpoint, body, write).await
}

pub async fn put<T, B, F>(endpoint: &str, body: &B, write: F) -> Result<T, String>
where
    B: Serialize,
    F: FnOnce(&B) -> model::Result<T>,
{
    send("PUT", endpoint, body, write).await
}
