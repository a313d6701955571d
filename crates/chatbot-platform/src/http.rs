//! `HttpPort` over browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use chatbot_core::ports::{HttpPort, HttpRequest, HttpResponse};
use chatbot_types::{ChatError, Result};

#[derive(Default)]
pub struct FetchHttp;

impl FetchHttp {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn post_json(&self, req: HttpRequest) -> Result<HttpResponse> {
        let response = Request::post(&req.url)
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", req.bearer))
            .json(&req.body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let status_text = response.status_text();
        // An unreadable body still leaves the status for the adapter to report
        let body = response.text().await.unwrap_or_default();

        log::debug!("POST {} -> {} {}", req.url, status, status_text);
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

fn network_error(e: gloo_net::Error) -> ChatError {
    ChatError::Adapter(format!("Network error: {}", e))
}
