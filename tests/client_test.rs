// Integration tests for the client's request dispatch

use privca::error::Error;
use privca::model::{
    Certificate, CreateCertificateRequest, DeleteCaPoolRequest, FetchCaCertsRequest,
    GetCaPoolRequest, GetCertificateRequest, ListCertificatesRequest, RevocationReason,
    RevokeCertificateRequest, UpdateCertificateRequest,
};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_get_certificate_dispatch() {
    let name = "projects/p/locations/l/caPools/pool/certificates/cert";
    let (client, transport) = common::client_with(vec![Ok(json!({
        "name": name,
        "pemCertificate": "-----BEGIN CERTIFICATE-----",
    }))]);

    let certificate = client
        .get_certificate(GetCertificateRequest::new(name))
        .await
        .unwrap();
    assert_eq!(certificate.name, name);
    assert_eq!(certificate.pem_certificate, "-----BEGIN CERTIFICATE-----");

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "GetCertificate");
    assert_eq!(
        calls[0].routing,
        vec![("name".to_string(), name.to_string())]
    );
    assert_eq!(calls[0].body["name"], name);
}

#[tokio::test]
async fn test_create_certificate_body_is_camel_case() {
    let parent = "projects/p/locations/l/caPools/pool";
    let (client, transport) = common::client_with(vec![Ok(json!({
        "name": format!("{}/certificates/c", parent),
    }))]);

    let certificate = Certificate {
        pem_csr: Some("-----BEGIN CERTIFICATE REQUEST-----".to_string()),
        lifetime: "86400s".to_string(),
        ..Certificate::default()
    };
    client
        .create_certificate(CreateCertificateRequest::new(parent, certificate))
        .await
        .unwrap();

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].method, "CreateCertificate");
    assert_eq!(calls[0].body["parent"], parent);
    assert_eq!(
        calls[0].body["certificate"]["pemCsr"],
        "-----BEGIN CERTIFICATE REQUEST-----"
    );
    // The convenience constructor minted an idempotency token
    assert!(calls[0].body["requestId"].is_string());
}

#[tokio::test]
async fn test_revoke_certificate_sends_reason() {
    let name = "projects/p/locations/l/caPools/pool/certificates/cert";
    let (client, transport) = common::client_with(vec![Ok(json!({
        "name": name,
        "revocationDetails": {"revocationState": "KEY_COMPROMISE"},
    }))]);

    let revoked = client
        .revoke_certificate(RevokeCertificateRequest::new(
            name,
            RevocationReason::KeyCompromise,
        ))
        .await
        .unwrap();
    assert_eq!(
        revoked.revocation_details.unwrap().revocation_state,
        RevocationReason::KeyCompromise
    );

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].body["reason"], "KEY_COMPROMISE");
}

#[tokio::test]
async fn test_update_certificate_routes_on_nested_name() {
    let name = "projects/p/locations/l/caPools/pool/certificates/cert";
    let (client, transport) = common::client_with(vec![Ok(json!({"name": name}))]);

    let request = UpdateCertificateRequest {
        certificate: Certificate {
            name: name.to_string(),
            ..Certificate::default()
        },
        update_mask: "labels".to_string(),
        request_id: None,
    };
    client.update_certificate(request).await.unwrap();

    let calls = transport.calls.lock().unwrap();
    assert_eq!(
        calls[0].routing,
        vec![("certificate.name".to_string(), name.to_string())]
    );
    assert_eq!(calls[0].body["updateMask"], "labels");
}

#[tokio::test]
async fn test_missing_required_field_fails_before_dispatch() {
    let (client, transport) = common::client_with(vec![]);

    let result = client
        .list_certificates(ListCertificatesRequest::new(""))
        .await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    // Validation happens up front; nothing reached the transport
    assert!(transport.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_negative_page_size_rejected() {
    let (client, transport) = common::client_with(vec![]);

    let mut request = ListCertificatesRequest::new("projects/p/locations/l/caPools/pool");
    request.page_size = Some(-5);
    let result = client.list_certificates(request).await;
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(transport.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_rpc_error_propagates() {
    let (client, _transport) = common::client_with(vec![Err(Error::Rpc {
        status: 404,
        message: "ca pool not found".to_string(),
    })]);

    let result = client
        .get_ca_pool(GetCaPoolRequest::new("projects/p/locations/l/caPools/nope"))
        .await;
    match result {
        Err(Error::Rpc { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "ca pool not found");
        }
        other => panic!("expected rpc error, got {:?}", other.map(|p| p.name)),
    }
}

#[tokio::test]
async fn test_delete_ca_pool_returns_operation() {
    let (client, transport) = common::client_with(vec![Ok(json!({
        "name": "projects/p/locations/l/operations/op-1",
        "done": false,
    }))]);

    let operation = client
        .delete_ca_pool(DeleteCaPoolRequest {
            name: "projects/p/locations/l/caPools/pool".to_string(),
            request_id: None,
        })
        .await
        .unwrap();
    assert_eq!(operation.name, "projects/p/locations/l/operations/op-1");
    assert!(!operation.done);

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls[0].method, "DeleteCaPool");
}

#[tokio::test]
async fn test_fetch_ca_certs_routes_on_ca_pool() {
    let ca_pool = "projects/p/locations/l/caPools/pool";
    let (client, transport) = common::client_with(vec![Ok(json!({
        "caCerts": [{"certificates": ["pem1", "pem2"]}],
    }))]);

    let response = client
        .fetch_ca_certs(FetchCaCertsRequest {
            ca_pool: ca_pool.to_string(),
            request_id: None,
        })
        .await
        .unwrap();
    assert_eq!(response.ca_certs.len(), 1);
    assert_eq!(response.ca_certs[0].certificates.len(), 2);

    let calls = transport.calls.lock().unwrap();
    assert_eq!(
        calls[0].routing,
        vec![("ca_pool".to_string(), ca_pool.to_string())]
    );
}
