use client::{
    ClientConfig, ClientError, HttpRequest, HttpResponse, Method, PredictionClient, Scheduler,
    Transport, timer_millis,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use std::time::Duration;

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Schedules with `setTimeout`. Dropping the `Timeout` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule<F: FnOnce() + 'static>(&self, delay: Duration, task: F) -> Timeout {
        Timeout::new(timer_millis(delay), task)
    }
}

pub type ServiceClient = PredictionClient<GlooTransport>;

/// Shared handle to the prediction client, compared by identity.
#[derive(Clone)]
pub struct ApiHandle(pub Rc<ServiceClient>);

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Client for the endpoint named by `KOI_API_BASE_URL` at build time.
pub fn service_client() -> Result<ApiHandle, ClientError> {
    let config = ClientConfig::from_base_url(option_env!("KOI_API_BASE_URL"));
    log::info!("Prediction service at {}", config.base_url);
    let client = PredictionClient::new(config, GlooTransport)?;
    Ok(ApiHandle(Rc::new(client)))
}
