// Validation functions for privca
// Provides reusable request and configuration validation logic

use url::Url;

use crate::error::Error;

/// Validate a client endpoint URL: must parse, use http(s), and carry a host.
pub fn validate_endpoint(endpoint: &str) -> Result<(), Error> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Config(format!(
            "Endpoint must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(Error::Config(format!(
            "Endpoint '{}' has no host",
            endpoint
        )));
    }

    Ok(())
}

/// Require a request field to be populated.
///
/// Runs once, up front, before a request is dispatched; a missing required
/// field is a caller contract error, not a remote failure.
pub fn require_field(value: &str, field: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "Missing required field '{}'",
            field
        )));
    }
    Ok(())
}

/// Validate an optional page size: the remote treats zero as "server
/// default", negatives are a caller error.
pub fn validate_page_size(page_size: Option<i32>) -> Result<(), Error> {
    if let Some(size) = page_size {
        if size < 0 {
            return Err(Error::InvalidArgument(format!(
                "page_size must not be negative, got {}",
                size
            )));
        }
    }
    Ok(())
}
