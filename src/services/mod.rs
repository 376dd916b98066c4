// Client surface for the certificate authority service
//
// One client struct; its RPC methods are grouped per resource in the
// submodules. Every method validates its request up front, attaches a
// routing parameter derived from the request's resource field, and
// dispatches through the injected transport.

pub mod authorities;
pub mod ca_pools;
pub mod certificates;
pub mod revocation_lists;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::paging::{AsyncPageFetcher, PageableRequest, PageableResponse};
use crate::transport::{HttpTransport, Transport};

/// Client for managing private certificate authorities and issued
/// certificates.
pub struct CertificateAuthorityClient {
    transport: Arc<dyn Transport>,
}

impl CertificateAuthorityClient {
    /// Build a client over the bundled HTTP transport.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let transport = HttpTransport::new(&options)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub(crate) async fn call<Req, Resp>(
        &self,
        method: &'static str,
        routing: (&str, &str),
        request: &Req,
    ) -> Result<Resp, Error>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request)?;
        let routing = vec![(routing.0.to_string(), routing.1.to_string())];
        let value = self.transport.call(method, &routing, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn page_fetcher(
        &self,
        method: &'static str,
        routing_field: &'static str,
        routing_value: &str,
    ) -> RpcPageFetcher {
        RpcPageFetcher {
            transport: self.transport.clone(),
            method,
            routing_field,
            routing_value: routing_value.to_string(),
        }
    }
}

/// Follow-up page fetcher that re-dispatches a list request through the
/// client's transport, preserving the original call's routing parameter.
pub(crate) struct RpcPageFetcher {
    transport: Arc<dyn Transport>,
    method: &'static str,
    routing_field: &'static str,
    routing_value: String,
}

#[async_trait]
impl<R, P> AsyncPageFetcher<R, P> for RpcPageFetcher
where
    R: PageableRequest + Serialize + Send + Sync,
    P: PageableResponse + DeserializeOwned,
{
    async fn fetch_page(&self, request: &R) -> Result<P, Error> {
        let body = serde_json::to_value(request)?;
        let routing = vec![(self.routing_field.to_string(), self.routing_value.clone())];
        let value = self.transport.call(self.method, &routing, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}
