// RPC transport seam
//
// The client dispatches every RPC through the `Transport` capability trait so
// callers can substitute their own stack. `HttpTransport` is the bundled
// JSON-over-HTTP implementation. Retry, backoff and credential negotiation
// belong to the transport's caller-supplied configuration, not to this crate.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::validation;

/// Invocation collaborator: one RPC in, one response or one failure out.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(
        &self,
        method: &str,
        routing: &[(String, String)],
        body: Value,
    ) -> Result<Value, Error>;
}

/// JSON-over-HTTP transport.
///
/// Dispatches `POST {endpoint}/v1/{Method}` with the request descriptor as
/// the JSON body. Routing parameters travel in the `x-request-params` header
/// in urlencoded form.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
    auth_token: Option<String>,
}

impl HttpTransport {
    pub fn new(options: &ClientOptions) -> Result<Self, Error> {
        validation::validate_endpoint(&options.endpoint)?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: options.endpoint.trim_end_matches('/').to_string(),
            user_agent: options.resolved_user_agent(),
            auth_token: options.auth_token.clone(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/v1/{}", self.endpoint, method)
    }
}

fn encode_routing_params(routing: &[(String, String)]) -> String {
    routing
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Pull a human-readable message out of a JSON error body, if there is one.
fn error_message(body: &Value) -> Option<String> {
    body.get("error")?
        .get("message")?
        .as_str()
        .map(|s| s.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: &str,
        routing: &[(String, String)],
        body: Value,
    ) -> Result<Value, Error> {
        let url = self.method_url(method);
        debug!(method, %url, "dispatching rpc");

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .json(&body);

        if !routing.is_empty() {
            request = request.header("x-request-params", encode_routing_params(routing));
        }

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            Ok(payload)
        } else {
            let message = error_message(&payload)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            Err(Error::Rpc {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_routing_params() {
        let routing = vec![(
            "parent".to_string(),
            "projects/p/locations/l/caPools/pool".to_string(),
        )];
        assert_eq!(
            encode_routing_params(&routing),
            "parent=projects%2Fp%2Flocations%2Fl%2FcaPools%2Fpool"
        );
    }

    #[test]
    fn test_encode_routing_params_multiple() {
        let routing = vec![
            ("parent".to_string(), "projects/p".to_string()),
            ("name".to_string(), "a b".to_string()),
        ];
        assert_eq!(
            encode_routing_params(&routing),
            "parent=projects%2Fp&name=a%20b"
        );
    }

    #[test]
    fn test_error_message_from_body() {
        let body = json!({"error": {"code": 404, "message": "not found"}});
        assert_eq!(error_message(&body), Some("not found".to_string()));
        assert_eq!(error_message(&json!({"ok": true})), None);
        assert_eq!(error_message(&Value::Null), None);
    }

    #[test]
    fn test_method_url() {
        let options = ClientOptions {
            endpoint: "https://privateca.googleapis.com/".to_string(),
            ..ClientOptions::default()
        };
        let transport = HttpTransport::new(&options).unwrap();
        assert_eq!(
            transport.method_url("ListCertificates"),
            "https://privateca.googleapis.com/v1/ListCertificates"
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let options = ClientOptions {
            endpoint: "ftp://example.com".to_string(),
            ..ClientOptions::default()
        };
        assert!(HttpTransport::new(&options).is_err());
    }
}
