// Certificate template RPCs

use crate::error::Error;
use crate::model::{
    CertificateTemplate, CreateCertificateTemplateRequest, DeleteCertificateTemplateRequest,
    GetCertificateTemplateRequest, ListCertificateTemplatesRequest,
    ListCertificateTemplatesResponse, Operation, UpdateCertificateTemplateRequest,
};
use crate::paging::AsyncPager;
use crate::validation;

use super::CertificateAuthorityClient;

impl CertificateAuthorityClient {
    /// Create a certificate template in a location.
    pub async fn create_certificate_template(
        &self,
        request: CreateCertificateTemplateRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.parent, "parent")?;
        validation::require_field(
            &request.certificate_template_id,
            "certificate_template_id",
        )?;
        self.call(
            "CreateCertificateTemplate",
            ("parent", &request.parent),
            &request,
        )
        .await
    }

    /// Delete a certificate template.
    pub async fn delete_certificate_template(
        &self,
        request: DeleteCertificateTemplateRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call(
            "DeleteCertificateTemplate",
            ("name", &request.name),
            &request,
        )
        .await
    }

    /// Fetch a single certificate template by resource name.
    pub async fn get_certificate_template(
        &self,
        request: GetCertificateTemplateRequest,
    ) -> Result<CertificateTemplate, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("GetCertificateTemplate", ("name", &request.name), &request)
            .await
    }

    /// List certificate templates in a location.
    pub async fn list_certificate_templates(
        &self,
        request: ListCertificateTemplatesRequest,
    ) -> Result<AsyncPager<ListCertificateTemplatesRequest, ListCertificateTemplatesResponse>, Error>
    {
        validation::require_field(&request.parent, "parent")?;
        validation::validate_page_size(request.page_size)?;

        let first: ListCertificateTemplatesResponse = self
            .call(
                "ListCertificateTemplates",
                ("parent", &request.parent),
                &request,
            )
            .await?;
        let fetcher = self.page_fetcher("ListCertificateTemplates", "parent", &request.parent);
        Ok(AsyncPager::new(request, first, Box::new(fetcher)))
    }

    /// Update a certificate template.
    pub async fn update_certificate_template(
        &self,
        request: UpdateCertificateTemplateRequest,
    ) -> Result<Operation, Error> {
        validation::require_field(
            &request.certificate_template.name,
            "certificate_template.name",
        )?;
        validation::require_field(&request.update_mask, "update_mask")?;
        self.call(
            "UpdateCertificateTemplate",
            (
                "certificate_template.name",
                &request.certificate_template.name,
            ),
            &request,
        )
        .await
    }
}
