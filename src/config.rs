/// Base URL of the backend handling newsletter signups and analytics events.
/// Overridable at build time so staging deployments can point elsewhere.
pub fn get_backend_url() -> String {
    option_env!("LAUNCHLINK_BACKEND_URL")
        .unwrap_or("http://127.0.0.1:3000")
        .to_string()
}
