// Certificate authority RPCs
//
// Lifecycle mutations answer with a long-running operation descriptor; the
// caller polls it through their operations surface.

use crate::error::Error;
use crate::model::{
    ActivateCertificateAuthorityRequest, CertificateAuthority,
    CreateCertificateAuthorityRequest, DeleteCertificateAuthorityRequest,
    DisableCertificateAuthorityRequest, EnableCertificateAuthorityRequest,
    FetchCertificateAuthorityCsrRequest, FetchCertificateAuthorityCsrResponse,
    GetCertificateAuthorityRequest, ListCertificateAuthoritiesRequest,
    ListCertificateAuthoritiesResponse, Operation, UndeleteCertificateAuthorityRequest,
    UpdateCertificateAuthorityRequest,
};
use crate::paging::AsyncPager;
use crate::validation;

use super::CertificateAuthorityClient;

impl CertificateAuthorityClient {
    /// Activate a subordinate CA awaiting its signed certificate.
    pub async fn activate_certificate_authority(
        &self,
        request: ActivateCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        validation::require_field(&request.pem_ca_certificate, "pem_ca_certificate")?;
        self.call(
            "ActivateCertificateAuthority",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Create a new certificate authority in a CA pool.
    pub async fn create_certificate_authority(
        &self,
        request: CreateCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.parent, "parent")?;
        validation::require_field(
            &request.certificate_authority_id,
            "certificate_authority_id",
        )?;
        self.call(
            "CreateCertificateAuthority",
            ("parent", &request.parent),
            &request,
        )
        .await
    }

    /// Disable an enabled certificate authority.
    pub async fn disable_certificate_authority(
        &self,
        request: DisableCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "DisableCertificateAuthority",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Enable a staged or disabled certificate authority.
    pub async fn enable_certificate_authority(
        &self,
        request: EnableCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "EnableCertificateAuthority",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Fetch the CSR of a subordinate CA pending activation.
    pub async fn fetch_certificate_authority_csr(
        &self,
        request: FetchCertificateAuthorityCsrRequest,
    ) -> Result<FetchCertificateAuthorityCsrResponse, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "FetchCertificateAuthorityCsr",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Fetch a single certificate authority by resource name.
    pub async fn get_certificate_authority(
        &self,
        request: GetCertificateAuthorityRequest,
    ) -> Result<CertificateAuthority, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("GetCertificateAuthority", ("name", &request.name), &request)
            .await
    }

    /// List certificate authorities in a CA pool.
    pub async fn list_certificate_authorities(
        &self,
        request: ListCertificateAuthoritiesRequest,
    ) -> Result<
        AsyncPager<ListCertificateAuthoritiesRequest, ListCertificateAuthoritiesResponse>,
        Error,
    > {
        validation::require_field(&request.parent, "parent")?;
        validation::validate_page_size(request.page_size)?;

        let first: ListCertificateAuthoritiesResponse = self
            .call(
                "ListCertificateAuthorities",
                ("parent", &request.parent),
                &request,
            )
            .await?;
        let fetcher = self.page_fetcher("ListCertificateAuthorities", "parent", &request.parent);
        Ok(AsyncPager::new(request, first, Box::new(fetcher)))
    }

    /// Restore a certificate authority that is in its deletion grace period.
    pub async fn undelete_certificate_authority(
        &self,
        request: UndeleteCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "UndeleteCertificateAuthority",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Schedule a certificate authority for deletion.
    pub async fn delete_certificate_authority(
        &self,
        request: DeleteCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "DeleteCertificateAuthority",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Update a certificate authority.
    pub async fn update_certificate_authority(
        &self,
        request: UpdateCertificateAuthorityRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(
            &request.certificate_authority.name,
            "certificate_authority.name",
        )?;
        validation::require_field(&request.update_mask, "update_mask")?;
        self.call(
            "UpdateCertificateAuthority",
            (
                "certificate_authority.name",
                &request.certificate_authority.name,
            ),
            &request,
        )
        .await
    }
}
