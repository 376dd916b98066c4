// Integration tests for pagination through the client

use privca::error::Error;
use privca::model::{ListCaPoolsRequest, ListCertificatesRequest};
use serde_json::json;

mod common;

fn cert(name: &str) -> serde_json::Value {
    json!({"name": format!("projects/p/locations/l/caPools/pool/certificates/{}", name)})
}

#[tokio::test]
async fn test_list_certificates_fetches_follow_up_pages() {
    let parent = "projects/p/locations/l/caPools/pool";
    let (client, transport) = common::client_with(vec![
        Ok(json!({
            "certificates": [cert("a"), cert("b")],
            "nextPageToken": "abc",
        })),
        Ok(json!({
            "certificates": [cert("c")],
            "nextPageToken": "",
        })),
    ]);

    let pager = client
        .list_certificates(ListCertificatesRequest::new(parent))
        .await
        .unwrap();
    let items = pager.all_items().await.unwrap();
    let names: Vec<_> = items
        .iter()
        .map(|c| c.name.rsplit('/').next().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let calls = transport.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    // The initial call carries no token, the follow-up carries the
    // continuation token and the same routing parameter
    assert!(calls[0].body.get("pageToken").is_none());
    assert_eq!(calls[1].method, "ListCertificates");
    assert_eq!(calls[1].body["pageToken"], "abc");
    assert_eq!(calls[1].body["parent"], parent);
    assert_eq!(
        calls[1].routing,
        vec![("parent".to_string(), parent.to_string())]
    );
}

#[tokio::test]
async fn test_single_page_issues_no_follow_up() {
    let (client, transport) = common::client_with(vec![Ok(json!({
        "certificates": [cert("only")],
        "nextPageToken": "",
    }))]);

    let pager = client
        .list_certificates(ListCertificatesRequest::new(
            "projects/p/locations/l/caPools/pool",
        ))
        .await
        .unwrap();
    let items = pager.all_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(transport.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_fetch_failure_is_not_end_of_results() {
    let (client, transport) = common::client_with(vec![
        Ok(json!({
            "caPools": [{"name": "projects/p/locations/l/caPools/pool1"}],
            "nextPageToken": "t1",
        })),
        Err(Error::Rpc {
            status: 503,
            message: "backend unavailable".to_string(),
        }),
    ]);

    let mut pager = client
        .list_ca_pools(ListCaPoolsRequest::new("projects/p/locations/l"))
        .await
        .unwrap();

    // First page drains cleanly
    let first = pager.next_item().await.unwrap().unwrap();
    assert_eq!(first.name, "projects/p/locations/l/caPools/pool1");

    // The failing fetch surfaces as an error at the pull that needed it
    assert!(matches!(
        pager.next_item().await,
        Err(Error::Rpc { status: 503, .. })
    ));

    // Permanently failed: exhausted, and no further fetch attempts were made
    assert!(pager.next_item().await.unwrap().is_none());
    assert_eq!(transport.calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_page_at_a_time_view() {
    let (client, _transport) = common::client_with(vec![
        Ok(json!({
            "caPools": [
                {"name": "projects/p/locations/l/caPools/pool1"},
                {"name": "projects/p/locations/l/caPools/pool2"},
            ],
            "nextPageToken": "t1",
        })),
        Ok(json!({
            "caPools": [{"name": "projects/p/locations/l/caPools/pool3"}],
            "nextPageToken": "",
        })),
    ]);

    let mut pager = client
        .list_ca_pools(ListCaPoolsRequest::new("projects/p/locations/l"))
        .await
        .unwrap();

    let page = pager.next_page().await.unwrap().unwrap();
    assert_eq!(page.ca_pools.len(), 2);
    let page = pager.next_page().await.unwrap().unwrap();
    assert_eq!(page.ca_pools.len(), 1);
    assert!(pager.next_page().await.unwrap().is_none());
}
