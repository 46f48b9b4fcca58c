use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use tracing::{debug, info};

use crate::api::UserApi;
use crate::config::PetstoreConfig;
use crate::error::PetstoreError;
use crate::models::{ApiResponse, User};
use crate::routes::{Operation, Routes};

const APPLICATION_JSON: &str = "application/json";

/// HTTP method used for the read call.
///
/// `Post` reproduces the misrouted suite, which sends the read as a POST to
/// `/user/{username}` and expects the service to refuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMethod {
    #[default]
    Get,
    Post,
}

impl ReadMethod {
    fn method(self) -> Method {
        match self {
            ReadMethod::Get => Method::GET,
            ReadMethod::Post => Method::POST,
        }
    }
}

/// Client for the `/user` endpoints of the pet-store
#[derive(Debug, Clone)]
pub struct UserEndpoints {
    http: Client,
    routes: Routes,
    read_method: ReadMethod,
}

impl UserEndpoints {
    pub fn new(config: &PetstoreConfig) -> Result<Self, PetstoreError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            routes: config.routes()?,
            read_method: ReadMethod::Get,
        })
    }

    /// Use an already configured HTTP client and route set
    pub fn with_routes(http: Client, routes: Routes) -> Self {
        Self {
            http,
            routes,
            read_method: ReadMethod::Get,
        }
    }

    pub fn with_read_method(mut self, read_method: ReadMethod) -> Self {
        self.read_method = read_method;
        self
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn read_method(&self) -> ReadMethod {
        self.read_method
    }

    fn json_request(&self, method: Method, url: &str, user: &User) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(user)
    }

    async fn exchange(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<ApiResponse, PetstoreError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        info!(
            operation = %operation,
            method = %method,
            url = %url,
            status = status.as_u16(),
            "pet-store request completed"
        );
        debug!(operation = %operation, body = %body, "pet-store response body");

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl UserApi for UserEndpoints {
    async fn create_user(&self, user: &User) -> Result<ApiResponse, PetstoreError> {
        let url = self.routes.url(Operation::Create);
        let request = self.json_request(Method::POST, url, user);
        self.exchange(Operation::Create, request).await
    }

    async fn read_user(&self, username: &str) -> Result<ApiResponse, PetstoreError> {
        let url = self.routes.resolve(Operation::Read, username);
        let request = self.http.request(self.read_method.method(), &url);
        self.exchange(Operation::Read, request).await
    }

    async fn update_user(&self, username: &str, user: &User) -> Result<ApiResponse, PetstoreError> {
        let url = self.routes.resolve(Operation::Update, username);
        let request = self.json_request(Method::PUT, &url, user);
        self.exchange(Operation::Update, request).await
    }

    async fn delete_user(&self, username: &str) -> Result<ApiResponse, PetstoreError> {
        let url = self.routes.resolve(Operation::Delete, username);
        let request = self.http.delete(&url);
        self.exchange(Operation::Delete, request).await
    }
}
