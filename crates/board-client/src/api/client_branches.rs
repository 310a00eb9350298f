//! Client branches API.

use crate::client::BoardClient;
use crate::error::Result;
use crate::query::{Pagination, QueryParams, ResponseGroup, ToQuery};
use crate::types::{
    ClientBranch, CreateClientBranchRequest, ListResponse, UpdateClientBranchRequest,
};

/// Query parameters for listing client branches.
#[derive(Debug, Clone, Default)]
pub struct ListClientBranchesQuery {
    pub pagination: Pagination,
    /// Include archived branches.
    pub include_archive_flg: Option<bool>,
    pub response_group: Option<ResponseGroup>,
}

impl ToQuery for ListClientBranchesQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .pagination(&self.pagination)
            .insert_opt("include_archive_flg", self.include_archive_flg)
            .response_group(self.response_group);
        query
    }
}

/// Client branches API client.
pub struct ClientBranchesApi {
    client: BoardClient,
}

impl ClientBranchesApi {
    pub(crate) fn new(client: BoardClient) -> Self {
        Self { client }
    }

    /// List client branches with server defaults.
    pub async fn list(&self) -> Result<ListResponse<ClientBranch>> {
        self.list_with_query(ListClientBranchesQuery::default()).await
    }

    /// List client branches with query parameters.
    pub async fn list_with_query(
        &self,
        query: ListClientBranchesQuery,
    ) -> Result<ListResponse<ClientBranch>> {
        self.client.get("/client_branches", query.to_query()).await
    }

    /// List the branches of one client.
    pub async fn list_by_client(
        &self,
        client_id: u64,
        query: ListClientBranchesQuery,
    ) -> Result<ListResponse<ClientBranch>> {
        self.client
            .get(&format!("/clients/{}/client_branches", client_id), query.to_query())
            .await
    }

    /// Get a client branch by ID.
    pub async fn get(&self, id: u64, response_group: Option<ResponseGroup>) -> Result<ClientBranch> {
        let mut query = QueryParams::new();
        query.response_group(response_group);
        self.client.get(&format!("/client_branches/{}", id), query).await
    }

    /// Create a new client branch.
    pub async fn create(&self, request: CreateClientBranchRequest) -> Result<ClientBranch> {
        self.client.post("/client_branches", &request).await
    }

    /// Create a branch under `client_id`, replacing any `client_id` already on `request`.
    pub async fn create_for_client(
        &self,
        client_id: u64,
        mut request: CreateClientBranchRequest,
    ) -> Result<ClientBranch> {
        request.client_id = client_id;
        self.create(request).await
    }

    /// Update a client branch. Only the fields set on `request` are sent.
    pub async fn update(&self, id: u64, request: UpdateClientBranchRequest) -> Result<ClientBranch> {
        self.client
            .patch(&format!("/client_branches/{}", id), &request)
            .await
    }

    /// Delete a client branch.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("/client_branches/{}", id)).await
    }

    /// Archive a client branch.
    pub async fn archive(&self, id: u64) -> Result<ClientBranch> {
        self.set_archived(id, true).await
    }

    /// Restore an archived client branch.
    pub async fn unarchive(&self, id: u64) -> Result<ClientBranch> {
        self.set_archived(id, false).await
    }

    async fn set_archived(&self, id: u64, archived: bool) -> Result<ClientBranch> {
        self.update(
            id,
            UpdateClientBranchRequest {
                archive_flg: Some(archived),
                ..Default::default()
            },
        )
        .await
    }
}
