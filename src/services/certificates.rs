// Certificate RPCs

use crate::error::Error;
use crate::model::{
    Certificate, CreateCertificateRequest, GetCertificateRequest, ListCertificatesRequest,
    ListCertificatesResponse, RevokeCertificateRequest, UpdateCertificateRequest,
};
use crate::paging::AsyncPager;
use crate::validation;

use super::CertificateAuthorityClient;

impl CertificateAuthorityClient {
    /// Request a certificate to be issued in a CA pool.
    pub async fn create_certificate(
        &self,
        request: CreateCertificateRequest,
    ) -> Result<Certificate, Error> {
        validation::require_field(&request.parent, "parent")?;
        self.call("CreateCertificate", ("parent", &request.parent), &request)
            .await
    }

    /// Fetch a single certificate by resource name.
    pub async fn get_certificate(
        &self,
        request: GetCertificateRequest,
    ) -> Result<Certificate, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("GetCertificate", ("name", &request.name), &request)
            .await
    }

    /// List certificates in a CA pool.
    ///
    /// Returns a pager over the full result set; follow-up pages are fetched
    /// as they are consumed.
    pub async fn list_certificates(
        &self,
        request: ListCertificatesRequest,
    ) -> Result<AsyncPager<ListCertificatesRequest, ListCertificatesResponse>, Error> {
        validation::require_field(&request.parent, "parent")?;
        validation::validate_page_size(request.page_size)?;

        let first: ListCertificatesResponse = self
            .call("ListCertificates", ("parent", &request.parent), &request)
            .await?;
        let fetcher = self.page_fetcher("ListCertificates", "parent", &request.parent);
        Ok(AsyncPager::new(request, first, Box::new(fetcher)))
    }

    /// Mark a certificate as revoked.
    pub async fn revoke_certificate(
        &self,
        request: RevokeCertificateRequest,
    ) -> Result<Certificate, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("RevokeCertificate", ("name", &request.name), &request)
            .await
    }

    /// Update a certificate; only labels are mutable on the remote side.
    pub async fn update_certificate(
        &self,
        request: UpdateCertificateRequest,
    ) -> Result<Certificate, Error> {
        validation::require_field(&request.certificate.name, "certificate.name")?;
        validation::require_field(&request.update_mask, "update_mask")?;
        self.call(
            "UpdateCertificate",
            ("certificate.name", &request.certificate.name),
            &request,
        )
        .await
    }
}
