// Common test utilities shared across test files

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use privca::error::Error;
use privca::transport::Transport;
use privca::CertificateAuthorityClient;

/// One recorded transport invocation
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedCall {
    pub method: String,
    pub routing: Vec<(String, String)>,
    pub body: Value,
}

/// Transport double that replays scripted responses and records every call
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, Error>>>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        method: &str,
        routing: &[(String, String)],
        body: Value,
    ) -> Result<Value, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            routing: routing.to_vec(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted")
    }
}

/// Build a client over a mock transport preloaded with `responses`.
#[allow(dead_code)]
pub fn client_with(
    responses: Vec<Result<Value, Error>>,
) -> (CertificateAuthorityClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport {
        responses: Mutex::new(responses.into()),
        calls: Mutex::new(Vec::new()),
    });
    let client = CertificateAuthorityClient::with_transport(transport.clone());
    (client, transport)
}
