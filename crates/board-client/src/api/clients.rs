//! Clients API.

use crate::client::BoardClient;
use crate::error::Result;
use crate::query::{Pagination, QueryParams, ResponseGroup, ToQuery};
use crate::types::{Client, CreateClientRequest, ListResponse, UpdateClientRequest};

/// Query parameters for listing clients.
#[derive(Debug, Clone, Default)]
pub struct ListClientsQuery {
    pub pagination: Pagination,
    /// Include archived clients.
    pub include_archive_flg: Option<bool>,
    pub response_group: Option<ResponseGroup>,
}

impl ToQuery for ListClientsQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .pagination(&self.pagination)
            .insert_opt("include_archive_flg", self.include_archive_flg)
            .response_group(self.response_group);
        query
    }
}

/// Clients API client.
pub struct ClientsApi {
    client: BoardClient,
}

impl ClientsApi {
    pub(crate) fn new(client: BoardClient) -> Self {
        Self { client }
    }

    /// List clients with server defaults.
    pub async fn list(&self) -> Result<ListResponse<Client>> {
        self.list_with_query(ListClientsQuery::default()).await
    }

    /// List clients with query parameters.
    pub async fn list_with_query(&self, query: ListClientsQuery) -> Result<ListResponse<Client>> {
        self.client.get("/clients", query.to_query()).await
    }

    /// Get a client by ID.
    pub async fn get(&self, id: u64, response_group: Option<ResponseGroup>) -> Result<Client> {
        let mut query = QueryParams::new();
        query.response_group(response_group);
        self.client.get(&format!("/clients/{}", id), query).await
    }

    /// Create a new client.
    pub async fn create(&self, request: CreateClientRequest) -> Result<Client> {
        self.client.post("/clients", &request).await
    }

    /// Update a client. Only the fields set on `request` are sent.
    pub async fn update(&self, id: u64, request: UpdateClientRequest) -> Result<Client> {
        self.client.patch(&format!("/clients/{}", id), &request).await
    }

    /// Delete a client.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("/clients/{}", id)).await
    }

    /// Archive a client.
    pub async fn archive(&self, id: u64) -> Result<Client> {
        self.set_archived(id, true).await
    }

    /// Restore an archived client.
    pub async fn unarchive(&self, id: u64) -> Result<Client> {
        self.set_archived(id, false).await
    }

    async fn set_archived(&self, id: u64, archived: bool) -> Result<Client> {
        self.update(
            id,
            UpdateClientRequest {
                archive_flg: Some(archived),
                ..Default::default()
            },
        )
        .await
    }
}
