//! HTTP adapter for the hosted record store
//!
//! Routes, relative to the configured base URL:
//!
//! | operation | request |
//! |-----------|---------|
//! | fetch     | `POST   /tables/{table}/records/query` |
//! | get by id | `POST   /tables/{table}/records/{id}/query` |
//! | create    | `POST   /tables/{table}/records` |
//! | update    | `PATCH  /tables/{table}/records` |
//! | delete    | `DELETE /tables/{table}/records` |
//!
//! Every request carries the project id and the public key. A non-2xx
//! response whose body is still an envelope is handed back as that envelope,
//! so the accessor reports the store's own message; any other non-2xx
//! response is mapped from its status code.

use async_trait::async_trait;
use clientdesk_core::RecordStore;
use clientdesk_domain::{
    ClientDeskError, DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams,
    GetResponse, RecordId, Result, StoreConfig, Table, WriteParams, WriteResponse,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::errors::{status_error, InfraError};
use crate::http::HttpClient;

const PROJECT_ID_HEADER: &str = "x-project-id";

/// `RecordStore` over HTTPS
pub struct HttpRecordStore {
    http: HttpClient,
    base_url: String,
}

impl HttpRecordStore {
    /// Build the adapter from store configuration.
    ///
    /// # Errors
    /// `Config` when the project id or public key is missing or not a valid
    /// header value.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        if config.project_id.trim().is_empty() {
            return Err(ClientDeskError::Config("store project id is not configured".into()));
        }
        if config.public_key.trim().is_empty() {
            return Err(ClientDeskError::Config("store public key is not configured".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(PROJECT_ID_HEADER), header_value(&config.project_id)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", config.public_key))?);

        let mut builder = HttpClient::builder()
            .user_agent(concat!("clientdesk/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self { http: builder.build()?, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn records_url(&self, table: Table) -> String {
        format!("{}/tables/{}/records", self.base_url, table)
    }

    async fn call<B, T>(&self, method: Method, url: String, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.http.send(self.http.request(method, url).json(body)).await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| ClientDeskError::from(InfraError::from(err)))?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(envelope) => {
                debug!(%status, "store returned error envelope");
                Ok(envelope)
            }
            Err(_) => {
                warn!(%status, "store request failed");
                Err(status_error(status))
            }
        }
    }
}

fn header_value(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw)
        .map_err(|err| ClientDeskError::Config(format!("invalid store credential: {err}")))
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    #[instrument(skip(self, params))]
    async fn fetch_records(&self, table: Table, params: &FetchParams) -> Result<FetchResponse> {
        let url = format!("{}/query", self.records_url(table));
        self.call(Method::POST, url, params).await
    }

    #[instrument(skip(self, params))]
    async fn get_record_by_id(
        &self,
        table: Table,
        id: RecordId,
        params: &FieldParams,
    ) -> Result<GetResponse> {
        let url = format!("{}/{id}/query", self.records_url(table));
        self.call(Method::POST, url, params).await
    }

    #[instrument(skip(self, params), fields(count = params.records.len()))]
    async fn create_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        self.call(Method::POST, self.records_url(table), params).await
    }

    #[instrument(skip(self, params), fields(count = params.records.len()))]
    async fn update_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        self.call(Method::PATCH, self.records_url(table), params).await
    }

    #[instrument(skip(self, params))]
    async fn delete_record(&self, table: Table, params: &DeleteParams) -> Result<DeleteResponse> {
        self.call(Method::DELETE, self.records_url(table), params).await
    }
}
