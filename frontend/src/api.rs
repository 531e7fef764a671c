use gloo_net::http::Request;
use thiserror::Error;
use trip_planner_lib::{trip_plan::TripPlan, trip_request::TripRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(gloo_net::Error),
    #[error("planning service returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(gloo_net::Error),
}

/// POSTs the form values to `{base_url}/plan-trip` and decodes the itinerary.
/// An empty `base_url` hits the serving origin directly.
pub async fn plan_trip(base_url: &str, request: &TripRequest) -> Result<TripPlan, ApiError> {
    let response = Request::post(&format!("{base_url}/plan-trip"))
        .json(request)
        .map_err(ApiError::Transport)?
        .send()
        .await
        .map_err(ApiError::Transport)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response.json::<TripPlan>().await.map_err(ApiError::Decode)
}
