// Resource types managed by the certificate authority service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distinguished name settings for issued certificates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAltNames {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubjectConfig {
    #[serde(default)]
    pub subject: Subject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_alt_name: Option<SubjectAltNames>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsageOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub digital_signature: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub content_commitment: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub key_encipherment: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub data_encipherment: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub key_agreement: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cert_sign: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub crl_sign: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub encipher_only: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub decipher_only: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedKeyUsageOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub server_auth: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub client_auth: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub code_signing: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub email_protection: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub time_stamping: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ocsp_signing: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_key_usage: Option<KeyUsageOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_key_usage: Option<ExtendedKeyUsageOptions>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CaOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ca: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_issuer_path_length: Option<i32>,
}

/// X.509 extension settings applied to issued certificates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct X509Parameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_options: Option<CaOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy_ids: Vec<ObjectId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aia_ocsp_servers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectId {
    #[serde(default)]
    pub object_id_path: Vec<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum PublicKeyFormat {
    #[default]
    #[serde(rename = "KEY_FORMAT_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "PEM")]
    Pem,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    #[serde(default)]
    pub format: PublicKeyFormat,
    /// Base64-encoded key bytes.
    #[serde(default)]
    pub key: String,
}

/// Parameters for certificates issued from a config rather than a CSR.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateConfig {
    #[serde(default)]
    pub subject_config: SubjectConfig,
    #[serde(default)]
    pub x509_config: X509Parameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum RevocationReason {
    #[default]
    #[serde(rename = "REVOCATION_REASON_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "KEY_COMPROMISE")]
    KeyCompromise,
    #[serde(rename = "CERTIFICATE_AUTHORITY_COMPROMISE")]
    CertificateAuthorityCompromise,
    #[serde(rename = "AFFILIATION_CHANGED")]
    AffiliationChanged,
    #[serde(rename = "SUPERSEDED")]
    Superseded,
    #[serde(rename = "CESSATION_OF_OPERATION")]
    CessationOfOperation,
    #[serde(rename = "CERTIFICATE_HOLD")]
    CertificateHold,
    #[serde(rename = "PRIVILEGE_WITHDRAWN")]
    PrivilegeWithdrawn,
    #[serde(rename = "ATTRIBUTE_AUTHORITY_COMPROMISE")]
    AttributeAuthorityCompromise,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevocationDetails {
    #[serde(default)]
    pub revocation_state: RevocationReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_time: Option<DateTime<Utc>>,
}

/// Issued certificate summary as the service reports it back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDescription {
    #[serde(default)]
    pub subject: Subject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_alt_name: Option<SubjectAltNames>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hex_serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_before_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_after_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateFingerprint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_description: Option<SubjectDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crl_distribution_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aia_issuing_certificate_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_fingerprint: Option<CertificateFingerprint>,
}

/// An issued X.509 certificate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Set when the certificate was requested from a CSR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pem_csr: Option<String>,
    /// Set when the certificate was requested from a config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CertificateConfig>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issuer_certificate_authority: String,
    /// Requested validity, in proto duration form (e.g. `"3600s"`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lifetime: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_details: Option<RevocationDetails>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pem_certificate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_description: Option<CertificateDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pem_certificate_chain: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum CertificateAuthorityType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "SELF_SIGNED")]
    SelfSigned,
    #[serde(rename = "SUBORDINATE")]
    Subordinate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum CertificateAuthorityState {
    #[default]
    #[serde(rename = "STATE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ENABLED")]
    Enabled,
    #[serde(rename = "DISABLED")]
    Disabled,
    #[serde(rename = "STAGED")]
    Staged,
    #[serde(rename = "AWAITING_USER_ACTIVATION")]
    AwaitingUserActivation,
    #[serde(rename = "DELETED")]
    Deleted,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum Tier {
    #[default]
    #[serde(rename = "TIER_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ENTERPRISE")]
    Enterprise,
    #[serde(rename = "DEVOPS")]
    Devops,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum SignHashAlgorithm {
    #[default]
    #[serde(rename = "SIGN_HASH_ALGORITHM_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "RSA_PSS_2048_SHA256")]
    RsaPss2048Sha256,
    #[serde(rename = "RSA_PSS_3072_SHA256")]
    RsaPss3072Sha256,
    #[serde(rename = "RSA_PSS_4096_SHA256")]
    RsaPss4096Sha256,
    #[serde(rename = "RSA_PKCS1_2048_SHA256")]
    RsaPkcs12048Sha256,
    #[serde(rename = "RSA_PKCS1_3072_SHA256")]
    RsaPkcs13072Sha256,
    #[serde(rename = "RSA_PKCS1_4096_SHA256")]
    RsaPkcs14096Sha256,
    #[serde(rename = "EC_P256_SHA256")]
    EcP256Sha256,
    #[serde(rename = "EC_P384_SHA384")]
    EcP384Sha384,
}

/// Signing key selection: either a managed key reference or an algorithm for
/// a service-generated key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KeyVersionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_kms_key_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<SignHashAlgorithm>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PemIssuerChain {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pem_certificates: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubordinateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pem_issuer_chain: Option<PemIssuerChain>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccessUrls {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_certificate_access_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crl_access_urls: Vec<String>,
}

/// A certificate authority within a CA pool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthority {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub authority_type: CertificateAuthorityType,
    #[serde(default)]
    pub config: CertificateConfig,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lifetime: String,
    #[serde(default)]
    pub key_spec: KeyVersionSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subordinate_config: Option<SubordinateConfig>,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub state: CertificateAuthorityState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pem_ca_certificates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_urls: Option<AccessUrls>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gcs_bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceModes {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_csr_based_issuance: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_config_based_issuance: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Expr {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateIdentityConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cel_expression: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_subject_passthrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_subject_alt_names_passthrough: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssuancePolicy {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maximum_lifetime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_issuance_modes: Option<IssuanceModes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_values: Option<X509Parameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_constraints: Option<CertificateIdentityConstraints>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishingOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub publish_ca_cert: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub publish_crl: bool,
}

/// A pool of certificate authorities sharing an issuance policy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CaPool {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_policy: Option<IssuancePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing_options: Option<PublishingOptions>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum CrlState {
    #[default]
    #[serde(rename = "STATE_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "SUPERSEDED")]
    Superseded,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RevokedCertificate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certificate: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hex_serial_number: String,
    #[serde(default)]
    pub revocation_reason: RevocationReason,
}

/// A certificate revocation list published by a certificate authority.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRevocationList {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revoked_certificates: Vec<RevokedCertificate>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pem_crl: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_url: String,
    #[serde(default)]
    pub state: CrlState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A reusable issuance profile referenced by certificate requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CertificateTemplate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_values: Option<X509Parameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_constraints: Option<CertificateIdentityConstraints>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}
