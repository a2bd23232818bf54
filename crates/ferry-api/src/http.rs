use std::time::Duration;

use async_trait::async_trait;
use ferry_core::{CallResponse, Transport, TransportError};
use ferry_model::wire::Call;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::{config::MasterConfig, error::ApiError};

/// Path of the v1 scheduler API on the master.
pub const SCHEDULER_PATH: &str = "/api/v1/scheduler";

/// Header carrying the subscription's stream id.
pub const STREAM_ID_HEADER: &str = "Mesos-Stream-Id";

/// [`Transport`] posting JSON-encoded calls to the master's scheduler endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    url: Url,
    stream_id: Option<String>,
}

impl HttpTransport {
    /// Build a transport for the master described by `cfg`.
    ///
    /// Fails when the endpoint is not a valid base URL or the client cannot be built.
    pub fn new(cfg: &MasterConfig) -> Result<Self, ApiError> {
        let base = cfg.endpoint.trim_end_matches('/');
        let url = Url::parse(&format!("{base}{SCHEDULER_PATH}"))
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {e}", cfg.endpoint)))?;

        let mut builder = Client::builder();
        if let Some(ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            client: builder.build()?,
            url,
            stream_id: cfg.stream_id.clone().filter(|s| !s.is_empty()),
        })
    }

    /// Full URL calls are posted to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn post(&self, call: &Call) -> Result<CallResponse, ApiError> {
        let mut request = self.client.post(self.url.clone()).json(call);
        if let Some(stream_id) = &self.stream_id {
            request = request.header(STREAM_ID_HEADER, stream_id);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(CallResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, call: &Call) -> Result<CallResponse, TransportError> {
        debug!(url = %self.url, call = ?call.kind, "posting call");
        let resp = self.post(call).await?;

        if !(200..300).contains(&resp.status) {
            warn!(status = resp.status, body = %resp.body, "master rejected call");
            return Err(TransportError::Status {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp)
    }
}
