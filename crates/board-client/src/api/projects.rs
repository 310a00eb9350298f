//! Projects API.

use crate::client::BoardClient;
use crate::error::Result;
use crate::query::{Pagination, QueryParams, ResponseGroup, ToQuery};
use crate::types::{CreateProjectRequest, ListResponse, Project, UpdateProjectRequest};

/// Query parameters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ListProjectsQuery {
    pub pagination: Pagination,
    pub response_group: Option<ResponseGroup>,
    pub status: Option<String>,
    pub client_id: Option<u64>,
    pub client_branch_id: Option<u64>,
}

impl ToQuery for ListProjectsQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .pagination(&self.pagination)
            .response_group(self.response_group)
            .insert_opt("status", self.status.as_deref())
            .insert_opt("client_id", self.client_id)
            .insert_opt("client_branch_id", self.client_branch_id);
        query
    }
}

/// Projects API client.
pub struct ProjectsApi {
    client: BoardClient,
}

impl ProjectsApi {
    pub(crate) fn new(client: BoardClient) -> Self {
        Self { client }
    }

    /// List projects with server defaults.
    pub async fn list(&self) -> Result<ListResponse<Project>> {
        self.list_with_query(ListProjectsQuery::default()).await
    }

    /// List projects with query parameters.
    pub async fn list_with_query(&self, query: ListProjectsQuery) -> Result<ListResponse<Project>> {
        self.fetch(query.to_query()).await
    }

    /// List projects of one client.
    ///
    /// `client_id` overrides any client filter already set on `query`.
    pub async fn list_by_client(
        &self,
        client_id: u64,
        query: ListProjectsQuery,
    ) -> Result<ListResponse<Project>> {
        self.fetch(query.to_query().with("client_id", client_id))
            .await
    }

    /// List projects of one client branch.
    ///
    /// `client_branch_id` overrides any branch filter already set on `query`.
    pub async fn list_by_client_branch(
        &self,
        client_branch_id: u64,
        query: ListProjectsQuery,
    ) -> Result<ListResponse<Project>> {
        self.fetch(query.to_query().with("client_branch_id", client_branch_id))
            .await
    }

    /// Get a project by ID.
    pub async fn get(&self, id: u64, response_group: Option<ResponseGroup>) -> Result<Project> {
        let mut query = QueryParams::new();
        query.response_group(response_group);
        self.client.get(&format!("/projects/{}", id), query).await
    }

    /// Create a new project.
    pub async fn create(&self, request: CreateProjectRequest) -> Result<Project> {
        self.client.post("/projects", &request).await
    }

    /// Create a project for `client_id`, replacing the `client_id` on `request`.
    pub async fn create_for_client(
        &self,
        client_id: u64,
        mut request: CreateProjectRequest,
    ) -> Result<Project> {
        request.client_id = client_id;
        self.create(request).await
    }

    /// Create a project for a client branch, replacing both parent IDs on `request`.
    pub async fn create_for_client_branch(
        &self,
        client_id: u64,
        client_branch_id: u64,
        mut request: CreateProjectRequest,
    ) -> Result<Project> {
        request.client_id = client_id;
        request.client_branch_id = Some(client_branch_id);
        self.create(request).await
    }

    /// Update a project. Only the fields set on `request` are sent.
    pub async fn update(&self, id: u64, request: UpdateProjectRequest) -> Result<Project> {
        self.client.patch(&format!("/projects/{}", id), &request).await
    }

    /// Change only the status of a project.
    pub async fn update_status(&self, id: u64, status: impl Into<String>) -> Result<Project> {
        self.update(
            id,
            UpdateProjectRequest {
                status: Some(status.into()),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete a project.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("/projects/{}", id)).await
    }

    async fn fetch(&self, query: QueryParams) -> Result<ListResponse<Project>> {
        self.client.get("/projects", query).await
    }
}
