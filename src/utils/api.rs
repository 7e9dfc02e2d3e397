use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config;

/// Thin client for the handful of backend endpoints the page talks to.
pub struct Api;

/// Request builder carrying the backend base URL and credentials.
pub struct RequestWrapper {
    builder: RequestBuilder,
    body: Option<String>,
}

impl RequestWrapper {
    fn new(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let builder = Request::post(&full_url).credentials(RequestCredentials::Include);
        Self { builder, body: None }
    }

    /// Sets a JSON body and the matching content type.
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        self.builder = self.builder.header("Content-Type", "application/json");
        self.body = Some(body);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let request = match self.body {
            Some(body) => self.builder.body(body)?,
            None => self.builder.build()?,
        };
        request.send().await
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path)
    }
}
