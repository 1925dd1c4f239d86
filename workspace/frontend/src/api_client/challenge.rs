use model::entities::prelude::Challenge;
use crate::api_client;
use crate::common::store::StoreHandle;

/// Get all cooking challenges
pub async fn get_challenges(store: StoreHandle) -> Result<Vec<Challenge>, String> {
    log::trace!("Fetching all challenges");
    let result = api_client::get("/challenges", || Ok(store.challenges())).await;
    if let Ok(challenges) = &result {
        log::info!("Fetched {} challenges", challenges.len());
    }
    result
}
