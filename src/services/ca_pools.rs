// CA pool RPCs

use crate::error::Error;
use crate::model::{
    CaPool, CreateCaPoolRequest, DeleteCaPoolRequest, FetchCaCertsRequest, FetchCaCertsResponse,
    GetCaPoolRequest, ListCaPoolsRequest, ListCaPoolsResponse, Operation, UpdateCaPoolRequest,
};
use crate::paging::AsyncPager;
use crate::validation;

use super::CertificateAuthorityClient;

impl CertificateAuthorityClient {
    /// Create a CA pool in a location.
    pub async fn create_ca_pool(&self, request: CreateCaPoolRequest) -> Result<Operation, Error> {
        validation::require_field(&request.parent, "parent")?;
        validation::require_field(&request.ca_pool_id, "ca_pool_id")?;
        self.call("CreateCaPool", ("parent", &request.parent), &request)
            .await
    }

    /// Update a CA pool.
    pub async fn update_ca_pool(&self, request: UpdateCaPoolRequest) -> Result<Operation, Error> {
        validation::require_field(&request.ca_pool.name, "ca_pool.name")?;
        validation::require_field(&request.update_mask, "update_mask")?;
        self.call(
            "UpdateCaPool",
            ("ca_pool.name", &request.ca_pool.name),
            &request,
        )
        .await
    }

    /// Fetch a single CA pool by resource name.
    pub async fn get_ca_pool(&self, request: GetCaPoolRequest) -> Result<CaPool, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("GetCaPool", ("name", &request.name), &request)
            .await
    }

    /// List CA pools in a location.
    pub async fn list_ca_pools(
        &self,
        request: ListCaPoolsRequest,
    ) -> Result<AsyncPager<ListCaPoolsRequest, ListCaPoolsResponse>, Error> {
        validation::require_field(&request.parent, "parent")?;
        validation::validate_page_size(request.page_size)?;

        let first: ListCaPoolsResponse = self
            .call("ListCaPools", ("parent", &request.parent), &request)
            .await?;
        let fetcher = self.page_fetcher("ListCaPools", "parent", &request.parent);
        Ok(AsyncPager::new(request, first, Box::new(fetcher)))
    }

    /// Delete an empty CA pool.
    pub async fn delete_ca_pool(&self, request: DeleteCaPoolRequest) -> Result<Operation, Error> {
        validation::require_field(&request.name, "name")?;
        self.call("DeleteCaPool", ("name", &request.name), &request)
            .await
    }

    /// Fetch the root certificates of every active CA in a pool.
    pub async fn fetch_ca_certs(
        &self,
        request: FetchCaCertsRequest,
    ) -> Result<FetchCaCertsResponse, Error> {
        validation::require_field(&request.ca_pool, "ca_pool")?;
        self.call("FetchCaCerts", ("ca_pool", &request.ca_pool), &request)
            .await
    }
}
