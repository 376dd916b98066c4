// Integration tests for resource name formatting and parsing

use std::collections::HashMap;

use privca::path::names;
use privca::path::PathTemplate;

#[test]
fn test_ca_pool_path_round_trip() {
    let path = names::ca_pool_path("proj1", "us-west1", "pool1");
    assert_eq!(path, "projects/proj1/locations/us-west1/caPools/pool1");

    let parsed = names::parse_ca_pool_path(&path).unwrap();
    let expected: HashMap<String, String> = [
        ("project", "proj1"),
        ("location", "us-west1"),
        ("ca_pool", "pool1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn test_non_matching_path_yields_no_match() {
    assert!(names::parse_ca_pool_path("not/a/matching/path").is_none());
    assert!(names::parse_certificate_path("projects/p/locations/l/caPools/pool").is_none());
    assert!(names::parse_certificate_template_path("").is_none());
}

#[test]
fn test_every_helper_round_trips() {
    let cases = [
        (
            names::certificate_path("p", "l", "pool", "cert"),
            names::parse_certificate_path as fn(&str) -> Option<HashMap<String, String>>,
        ),
        (
            names::certificate_authority_path("p", "l", "pool", "ca"),
            names::parse_certificate_authority_path,
        ),
        (
            names::certificate_revocation_list_path("p", "l", "pool", "ca", "crl"),
            names::parse_certificate_revocation_list_path,
        ),
        (
            names::certificate_template_path("p", "l", "tmpl"),
            names::parse_certificate_template_path,
        ),
        (
            names::common_location_path("p", "l"),
            names::parse_common_location_path,
        ),
    ];

    for (path, parse) in cases {
        let parsed = parse(&path).unwrap_or_else(|| panic!("'{}' did not parse", path));
        assert!(!parsed.is_empty());
    }
}

#[test]
fn test_templates_with_shared_prefixes_stay_independent() {
    let ca = names::certificate_authority_path("p", "l", "pool", "ca");
    assert!(names::parse_ca_pool_path(&ca).is_none());
    assert!(names::parse_certificate_path(&ca).is_none());

    let crl = names::certificate_revocation_list_path("p", "l", "pool", "ca", "crl");
    assert!(names::parse_certificate_authority_path(&crl).is_none());
}

#[test]
fn test_format_then_match_is_identity() {
    let template =
        PathTemplate::new("projects/{project}/locations/{location}/caPools/{ca_pool}").unwrap();
    let values: HashMap<String, String> = [
        ("project", "proj-42"),
        ("location", "europe-north1"),
        ("ca_pool", "edge_pool"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let formatted = template.format(&values).unwrap();
    assert_eq!(template.matches(&formatted), Some(values));
}

#[test]
fn test_segment_count_mismatch_never_matches() {
    let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
    for candidate in [
        "projects",
        "projects/p",
        "projects/p/locations",
        "projects/p/locations/l/extra",
    ] {
        assert_eq!(template.matches(candidate), None, "candidate: {}", candidate);
    }
}

#[test]
fn test_literal_mismatch_never_matches() {
    let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
    // Same segment count, wrong literals
    assert_eq!(template.matches("projects/p/regions/l"), None);
    assert_eq!(template.matches("folders/p/locations/l"), None);
}
