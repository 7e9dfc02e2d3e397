use serde_json::{json, Value};

use crate::utils::api::Api;

/// Fire-and-forget analytics event. Logged to the console and posted to the
/// backend; delivery failures are ignored, the UI never waits on this.
pub fn track_event(name: &str, properties: Value) {
    gloo_console::log!("track:", name, properties.to_string());

    let payload = json!({ "name": name, "properties": properties });
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(request) = Api::post("/api/events").json(&payload) {
            let _ = request.send().await;
        }
    });
}
