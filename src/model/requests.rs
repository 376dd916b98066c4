// Request and response messages, one pair per RPC
//
// List requests/responses additionally implement the paging traits so list
// RPCs can be wrapped in a pager.

use serde::{Deserialize, Serialize};

use super::resources::*;
use crate::paging::{PageableRequest, PageableResponse};

/// Mint a client-supplied idempotency token for a mutation request.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    pub certificate: Certificate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_certificate_authority_id: Option<String>,
}

impl CreateCertificateRequest {
    pub fn new(parent: impl Into<String>, certificate: Certificate) -> Self {
        Self {
            parent: parent.into(),
            certificate,
            request_id: Some(generate_request_id()),
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCertificateRequest {
    pub name: String,
}

impl GetCertificateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificatesRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListCertificatesRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }
}

impl PageableRequest for ListCertificatesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificatesResponse {
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub unreachable: Vec<String>,
}

impl PageableResponse for ListCertificatesResponse {
    type Item = Certificate;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.certificates
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevokeCertificateRequest {
    pub name: String,
    pub reason: RevocationReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl RevokeCertificateRequest {
    pub fn new(name: impl Into<String>, reason: RevocationReason) -> Self {
        Self {
            name: name.into(),
            reason,
            request_id: Some(generate_request_id()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateRequest {
    pub certificate: Certificate,
    /// Comma-separated field mask selecting the fields to update.
    pub update_mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivateCertificateAuthorityRequest {
    pub name: String,
    pub pem_ca_certificate: String,
    pub subordinate_config: SubordinateConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateAuthorityRequest {
    pub parent: String,
    pub certificate_authority_id: String,
    pub certificate_authority: CertificateAuthority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateCertificateAuthorityRequest {
    pub fn new(
        parent: impl Into<String>,
        certificate_authority_id: impl Into<String>,
        certificate_authority: CertificateAuthority,
    ) -> Self {
        Self {
            parent: parent.into(),
            certificate_authority_id: certificate_authority_id.into(),
            certificate_authority,
            request_id: Some(generate_request_id()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisableCertificateAuthorityRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnableCertificateAuthorityRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchCertificateAuthorityCsrRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchCertificateAuthorityCsrResponse {
    #[serde(default)]
    pub pem_csr: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCertificateAuthorityRequest {
    pub name: String,
}

impl GetCertificateAuthorityRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateAuthoritiesRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListCertificateAuthoritiesRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }
}

impl PageableRequest for ListCertificateAuthoritiesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateAuthoritiesResponse {
    #[serde(default)]
    pub certificate_authorities: Vec<CertificateAuthority>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub unreachable: Vec<String>,
}

impl PageableResponse for ListCertificateAuthoritiesResponse {
    type Item = CertificateAuthority;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.certificate_authorities
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UndeleteCertificateAuthorityRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCertificateAuthorityRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_active_certificates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_grace_period: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateAuthorityRequest {
    pub certificate_authority: CertificateAuthority,
    pub update_mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaPoolRequest {
    pub parent: String,
    pub ca_pool_id: String,
    pub ca_pool: CaPool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateCaPoolRequest {
    pub fn new(parent: impl Into<String>, ca_pool_id: impl Into<String>, ca_pool: CaPool) -> Self {
        Self {
            parent: parent.into(),
            ca_pool_id: ca_pool_id.into(),
            ca_pool,
            request_id: Some(generate_request_id()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaPoolRequest {
    pub ca_pool: CaPool,
    pub update_mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCaPoolRequest {
    pub name: String,
}

impl GetCaPoolRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCaPoolsRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListCaPoolsRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }
}

impl PageableRequest for ListCaPoolsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCaPoolsResponse {
    #[serde(default)]
    pub ca_pools: Vec<CaPool>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub unreachable: Vec<String>,
}

impl PageableResponse for ListCaPoolsResponse {
    type Item = CaPool;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.ca_pools
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCaPoolRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchCaCertsRequest {
    pub ca_pool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertChain {
    #[serde(default)]
    pub certificates: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchCaCertsResponse {
    #[serde(default)]
    pub ca_certs: Vec<CertChain>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCertificateRevocationListRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateRevocationListsRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListCertificateRevocationListsRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }
}

impl PageableRequest for ListCertificateRevocationListsRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateRevocationListsResponse {
    #[serde(default)]
    pub certificate_revocation_lists: Vec<CertificateRevocationList>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub unreachable: Vec<String>,
}

impl PageableResponse for ListCertificateRevocationListsResponse {
    type Item = CertificateRevocationList;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.certificate_revocation_lists
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateRevocationListRequest {
    pub certificate_revocation_list: CertificateRevocationList,
    pub update_mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateTemplateRequest {
    pub parent: String,
    pub certificate_template_id: String,
    pub certificate_template: CertificateTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CreateCertificateTemplateRequest {
    pub fn new(
        parent: impl Into<String>,
        certificate_template_id: impl Into<String>,
        certificate_template: CertificateTemplate,
    ) -> Self {
        Self {
            parent: parent.into(),
            certificate_template_id: certificate_template_id.into(),
            certificate_template,
            request_id: Some(generate_request_id()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCertificateTemplateRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetCertificateTemplateRequest {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateTemplatesRequest {
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub page_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ListCertificateTemplatesRequest {
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }
}

impl PageableRequest for ListCertificateTemplatesRequest {
    fn set_page_token(&mut self, token: String) {
        self.page_token = token;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCertificateTemplatesResponse {
    #[serde(default)]
    pub certificate_templates: Vec<CertificateTemplate>,
    #[serde(default)]
    pub next_page_token: String,
    #[serde(default)]
    pub unreachable: Vec<String>,
}

impl PageableResponse for ListCertificateTemplatesResponse {
    type Item = CertificateTemplate;

    fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    fn into_items(self) -> Vec<Self::Item> {
        self.certificate_templates
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCertificateTemplateRequest {
    pub certificate_template: CertificateTemplate,
    pub update_mask: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
