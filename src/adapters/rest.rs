use crate::core::{ConfigProvider, ContentSource};
use crate::domain::model::{Collection, Query};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

/// PostgREST-style table API (`/rest/v1/<table>`) as served by hosted
/// Postgres platforms.
#[derive(Debug, Clone)]
pub struct RestContentSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestContentSource {
    pub fn new(backend_url: &str, schema_path: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: format!(
                "{}/{}",
                backend_url.trim_end_matches('/'),
                schema_path.trim_matches('/')
            ),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.backend_url(), config.schema_path(), config.api_key())
    }

    fn table_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// `?select=*&col=eq.value&order=a.desc,b.asc`
    fn query_params(query: &Query) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];

        for filter in &query.filters {
            let value = match &filter.value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            params.push((filter.column.to_string(), format!("eq.{}", value)));
        }

        if !query.order.is_empty() {
            let order = query
                .order
                .iter()
                .map(|key| {
                    format!(
                        "{}.{}",
                        key.column,
                        if key.ascending { "asc" } else { "desc" }
                    )
                })
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_string(), order));
        }

        params
    }

    async fn ensure_success(collection: Collection, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(SiteError::BackendError {
            collection: collection.to_string(),
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContentSource for RestContentSource {
    async fn query(&self, query: &Query) -> Result<Vec<serde_json::Value>> {
        let url = self.table_url(query.collection);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .authorized(self.client.get(&url))
            .header("Accept", "application/json")
            .query(&Self::query_params(query))
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let response = Self::ensure_success(query.collection, response).await?;

        let rows: Vec<serde_json::Value> = response.json().await?;
        Ok(rows)
    }

    async fn insert(&self, collection: Collection, row: serde_json::Value) -> Result<()> {
        let url = self.table_url(collection);
        tracing::debug!("Inserting one row into: {}", url);

        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        Self::ensure_success(collection, response).await?;
        Ok(())
    }
}
