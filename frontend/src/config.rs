/// Base URL of the planning service, baked in at compile time via
/// `TRIP_API_BASE_URL`. Falls back to same-origin relative requests, matching
/// a deployment where the service sits behind the page's own host.
pub fn api_base_url() -> String {
    option_env!("TRIP_API_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}
