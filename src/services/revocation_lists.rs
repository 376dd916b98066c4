// Certificate revocation list RPCs

use crate::error::Error;
use crate::model::{
    CertificateRevocationList, GetCertificateRevocationListRequest,
    ListCertificateRevocationListsRequest, ListCertificateRevocationListsResponse, Operation,
    UpdateCertificateRevocationListRequest,
};
use crate::paging::AsyncPager;
use crate::validation;

use super::CertificateAuthorityClient;

impl CertificateAuthorityClient {
    /// Fetch a single revocation list by resource name.
    pub async fn get_certificate_revocation_list(
        &self,
        request: GetCertificateRevocationListRequest,
    ) -> Result<CertificateRevocationList, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "GetCertificateRevocationList",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// List revocation lists published by a certificate authority.
    pub async fn list_certificate_revocation_lists(
        &self,
        request: ListCertificateRevocationListsRequest,
    ) -> Result<
        AsyncPager<ListCertificateRevocationListsRequest, ListCertificateRevocationListsResponse>,
        Error,
    > {
        validation::require_field(&request.parent, "parent")?;
        validation::validate_page_size(request.page_size)?;

        let first: ListCertificateRevocationListsResponse = self
            .call(
                "ListCertificateRevocationLists",
                ("parent", &request.parent),
                &request,
            )
            .await?;
        let fetcher =
            self.page_fetcher("ListCertificateRevocationLists", "parent", &request.parent);
        Ok(AsyncPager::new(request, first, Box::new(fetcher)))
    }

    /// Update a revocation list; only labels are mutable on the remote side.
    pub async fn update_certificate_revocation_list(
        &self,
        request: UpdateCertificateRevocationListRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(
            &request.certificate_revocation_list.name,
            "certificate_revocation_list.name",
        )?;
        validation::require_field(&request.update_mask, "update_mask")?;
        self.call(
            "UpdateCertificateRevocationList",
            (
                "certificate_revocation_list.name",
                &request.certificate_revocation_list.name,
            ),
            &request,
        )
        .await
    }
}
