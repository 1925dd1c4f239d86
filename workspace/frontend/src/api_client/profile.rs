use common::UpdateProfileRequest;
use model::entities::prelude::Profile;
use crate::api_client;
use crate::common::store::StoreHandle;

/// Get a profile by slug, or the signed-in user's for `None`
pub async fn get_profile(store: StoreHandle, username: Option<String>) -> Result<Profile, String> {
    let endpoint = match &username {
        Some(name) => format!("/profiles/{}", name),
        None => "/profiles/me".to_string(),
    };
    log::trace!("Fetching profile: {}", endpoint);
    let result = api_client::get(&endpoint, || store.profile(username.as_deref())).await;
    if let Ok(profile) = &result {
        log::info!("Fetched profile: {} (ID: {})", profile.name, profile.id);
    }
    result
}

/// Save the signed-in user's profile
pub async fn update_profile(store: StoreHandle, request: UpdateProfileRequest) -> Result<(), String> {
    log::debug!("Updating profile: {}", request.name);
    let result = api_client::put("/profiles/me", &request, |body| store.update_profile(body)).await;
    if let Err(e) = &result {
        log::error!("Failed to update profile: {}", e);
    }
    result
}
