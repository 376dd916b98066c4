// Resource name helpers for the certificate authority service hierarchy

use std::collections::HashMap;
use std::sync::LazyLock;

use super::template::PathTemplate;

static CA_POOL: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new("projects/{project}/locations/{location}/caPools/{ca_pool}")
        .expect("ca_pool pattern is valid")
});

static CERTIFICATE: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new(
        "projects/{project}/locations/{location}/caPools/{ca_pool}/certificates/{certificate}",
    )
    .expect("certificate pattern is valid")
});

static CERTIFICATE_AUTHORITY: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new(
        "projects/{project}/locations/{location}/caPools/{ca_pool}/certificateAuthorities/{certificate_authority}",
    )
    .expect("certificate_authority pattern is valid")
});

static CERTIFICATE_REVOCATION_LIST: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new(
        "projects/{project}/locations/{location}/caPools/{ca_pool}/certificateAuthorities/{certificate_authority}/certificateRevocationLists/{certificate_revocation_list}",
    )
    .expect("certificate_revocation_list pattern is valid")
});

static CERTIFICATE_TEMPLATE: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new(
        "projects/{project}/locations/{location}/certificateTemplates/{certificate_template}",
    )
    .expect("certificate_template pattern is valid")
});

static COMMON_PROJECT: LazyLock<PathTemplate> =
    LazyLock::new(|| PathTemplate::new("projects/{project}").expect("project pattern is valid"));

static COMMON_LOCATION: LazyLock<PathTemplate> = LazyLock::new(|| {
    PathTemplate::new("projects/{project}/locations/{location}")
        .expect("location pattern is valid")
});

fn render(template: &PathTemplate, pairs: &[(&str, &str)]) -> String {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    template
        .format(&values)
        .expect("every template variable has a value")
}

/// Returns a fully-qualified ca pool resource name.
pub fn ca_pool_path(project: &str, location: &str, ca_pool: &str) -> String {
    render(
        &CA_POOL,
        &[
            ("project", project),
            ("location", location),
            ("ca_pool", ca_pool),
        ],
    )
}

/// Parses a ca pool resource name into its component segments.
pub fn parse_ca_pool_path(path: &str) -> Option<HashMap<String, String>> {
    CA_POOL.matches(path)
}

/// Returns a fully-qualified certificate resource name.
pub fn certificate_path(
    project: &str,
    location: &str,
    ca_pool: &str,
    certificate: &str,
) -> String {
    render(
        &CERTIFICATE,
        &[
            ("project", project),
            ("location", location),
            ("ca_pool", ca_pool),
            ("certificate", certificate),
        ],
    )
}

/// Parses a certificate resource name into its component segments.
pub fn parse_certificate_path(path: &str) -> Option<HashMap<String, String>> {
    CERTIFICATE.matches(path)
}

/// Returns a fully-qualified certificate authority resource name.
pub fn certificate_authority_path(
    project: &str,
    location: &str,
    ca_pool: &str,
    certificate_authority: &str,
) -> String {
    render(
        &CERTIFICATE_AUTHORITY,
        &[
            ("project", project),
            ("location", location),
            ("ca_pool", ca_pool),
            ("certificate_authority", certificate_authority),
        ],
    )
}

/// Parses a certificate authority resource name into its component segments.
pub fn parse_certificate_authority_path(path: &str) -> Option<HashMap<String, String>> {
    CERTIFICATE_AUTHORITY.matches(path)
}

/// Returns a fully-qualified certificate revocation list resource name.
pub fn certificate_revocation_list_path(
    project: &str,
    location: &str,
    ca_pool: &str,
    certificate_authority: &str,
    certificate_revocation_list: &str,
) -> String {
    render(
        &CERTIFICATE_REVOCATION_LIST,
        &[
            ("project", project),
            ("location", location),
            ("ca_pool", ca_pool),
            ("certificate_authority", certificate_authority),
            (
                "certificate_revocation_list",
                certificate_revocation_list,
            ),
        ],
    )
}

/// Parses a certificate revocation list resource name into its component
/// segments.
pub fn parse_certificate_revocation_list_path(path: &str) -> Option<HashMap<String, String>> {
    CERTIFICATE_REVOCATION_LIST.matches(path)
}

/// Returns a fully-qualified certificate template resource name.
pub fn certificate_template_path(
    project: &str,
    location: &str,
    certificate_template: &str,
) -> String {
    render(
        &CERTIFICATE_TEMPLATE,
        &[
            ("project", project),
            ("location", location),
            ("certificate_template", certificate_template),
        ],
    )
}

/// Parses a certificate template resource name into its component segments.
pub fn parse_certificate_template_path(path: &str) -> Option<HashMap<String, String>> {
    CERTIFICATE_TEMPLATE.matches(path)
}

/// Returns a fully-qualified project resource name.
pub fn common_project_path(project: &str) -> String {
    render(&COMMON_PROJECT, &[("project", project)])
}

/// Parses a project resource name into its component segments.
pub fn parse_common_project_path(path: &str) -> Option<HashMap<String, String>> {
    COMMON_PROJECT.matches(path)
}

/// Returns a fully-qualified location resource name.
pub fn common_location_path(project: &str, location: &str) -> String {
    render(
        &COMMON_LOCATION,
        &[("project", project), ("location", location)],
    )
}

/// Parses a location resource name into its component segments.
pub fn parse_common_location_path(path: &str) -> Option<HashMap<String, String>> {
    COMMON_LOCATION.matches(path)
}
