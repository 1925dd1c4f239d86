use common::CreateLearningPlanRequest;
use model::entities::prelude::LearningPlan;
use crate::api_client;
use crate::common::store::StoreHandle;

/// Get all learning plans
pub async fn get_learning_plans(store: StoreHandle) -> Result<Vec<LearningPlan>, String> {
    log::trace!("Fetching all learning plans");
    let result = api_client::get("/learning-plans", || Ok(store.learning_plans())).await;
    if let Ok(plans) = &result {
        log::info!("Fetched {} learning plans", plans.len());
    }
    result
}

/// Publish a new learning plan
pub async fn create_learning_plan(
    store: StoreHandle,
    request: CreateLearningPlanRequest,
) -> Result<(), String> {
    log::debug!("Creating new learning plan: {}", request.title);
    let result = api_client::post("/learning-plans", &request, |body| {
        store.create_learning_plan(body)
    })
    .await;
    if let Err(e) = &result {
        log::error!("Failed to create learning plan '{}': {}", request.title, e);
    }
    result
}
