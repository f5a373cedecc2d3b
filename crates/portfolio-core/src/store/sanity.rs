//! HTTP content store.
//!
//! Talks to the hosted document store's query, mutate and asset endpoints:
//!
//! ```text
//! GET  {base}/v{version}/data/query/{dataset}?query=<groq>&$id="<id>"
//! POST {base}/v{version}/data/mutate/{dataset}?returnIds=true&visibility=sync
//! POST {base}/v{version}/assets/images/{dataset}?filename=<name>
//! ```

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use super::{
    project_by_id_groq, ContentStore, FieldSet, Mutation, ProjectQuery, TransactionReceipt,
    PROJECT_TYPE,
};
use crate::config::StoreConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::image_url::AssetRef;
use crate::mapping::RawProject;
use crate::types::{ImageUpload, ProjectId};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
struct MutateResponse {
    #[serde(rename = "transactionId")]
    transaction_id: String,
    #[serde(default)]
    results: Vec<MutateResult>,
}

#[derive(Debug, Deserialize)]
struct MutateResult {
    id: String,
    #[serde(default)]
    operation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssetResponse {
    document: AssetDocument,
}

#[derive(Debug, Deserialize)]
struct AssetDocument {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn describe(self) -> Option<String> {
        match self.error {
            Some(Value::Object(obj)) => obj
                .get("description")
                .or_else(|| obj.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Some(Value::String(s)) => Some(self.message.unwrap_or(s)),
            _ => self.message,
        }
    }
}

/// Content store backed by the hosted HTTP API.
#[derive(Clone)]
pub struct SanityStore {
    config: StoreConfig,
    client: Client,
}

impl SanityStore {
    pub fn new(config: StoreConfig) -> PortfolioResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn endpoint(&self, path: &str, for_write: bool) -> String {
        format!(
            "{}/v{}/{}/{}",
            self.config.api_base(for_write),
            self.config.api_version,
            path,
            self.config.dataset
        )
    }

    fn write_token(&self) -> PortfolioResult<&str> {
        self.config
            .write_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(PortfolioError::NotConfigured)
    }

    fn authorize(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into an `Api` error with the store's message.
    async fn check(response: Response) -> PortfolioResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body
            .describe()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(PortfolioError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, Value)],
        privileged: bool,
    ) -> PortfolioResult<T> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${}", name), value.to_string()));
        }

        // Admin reads skip the CDN and use the write token when present
        let token = if privileged {
            self.config.write_token.as_deref().or(self.config.read_token.as_deref())
        } else {
            self.config.read_token.as_deref()
        };

        let url = self.endpoint("data/query", privileged);
        debug!(%url, privileged, "Running store query");

        let request = self.authorize(self.client.get(&url).query(&pairs), token);
        let response = Self::check(request.send().await?).await?;
        let body: QueryResponse<T> = response.json().await?;
        Ok(body.result)
    }
}

fn asset_json(asset: &AssetRef) -> Value {
    json!({
        "_type": "image",
        "asset": { "_type": "reference", "_ref": asset.as_str() }
    })
}

fn set_json(set: &FieldSet) -> Value {
    let mut fields = Map::new();
    if let Some(title) = &set.title {
        fields.insert("title".into(), json!(title));
    }
    if let Some(category) = set.category {
        fields.insert("category".into(), json!(category.as_str()));
    }
    if let Some(description) = &set.description {
        fields.insert("description".into(), json!(description));
    }
    if let Some(image) = &set.image {
        fields.insert("image".into(), asset_json(image));
    }
    if let Some(published) = set.published {
        fields.insert("published".into(), json!(published));
    }
    if let Some(order) = set.order {
        fields.insert("order".into(), json!(order));
    }
    Value::Object(fields)
}

/// Wire form of one mutation.
pub(crate) fn mutation_json(mutation: &Mutation) -> Value {
    match mutation {
        Mutation::Create(doc) => json!({
            "create": {
                "_type": PROJECT_TYPE,
                "title": doc.title,
                "category": doc.category.as_str(),
                "description": doc.description,
                "published": doc.published,
                "image": asset_json(&doc.image),
            }
        }),
        Mutation::Patch { id, set } => json!({
            "patch": { "id": id.as_str(), "set": set_json(set) }
        }),
        Mutation::Delete(id) => json!({
            "delete": { "id": id.as_str() }
        }),
    }
}

#[async_trait]
impl ContentStore for SanityStore {
    async fn fetch_projects(&self, query: &ProjectQuery) -> PortfolioResult<Vec<RawProject>> {
        let projects: Option<Vec<RawProject>> =
            self.query(&query.to_groq(), &[], query.include_drafts).await?;
        Ok(projects.unwrap_or_default())
    }

    async fn fetch_project(&self, id: &ProjectId) -> PortfolioResult<Option<RawProject>> {
        self.query(&project_by_id_groq(), &[("id", json!(id.as_str()))], true)
            .await
    }

    async fn upload_image(&self, upload: &ImageUpload) -> PortfolioResult<AssetRef> {
        let token = self.write_token()?;
        let url = self.endpoint("assets/images", true);
        info!(filename = %upload.filename, bytes = upload.bytes.len(), "Uploading image asset");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .query(&[("filename", upload.filename.as_str())])
            .header(reqwest::header::CONTENT_TYPE, upload.content_type.as_str())
            .body(upload.bytes.clone())
            .send()
            .await?;
        let body: AssetResponse = Self::check(response).await?.json().await?;
        Ok(AssetRef::new(body.document.id))
    }

    async fn mutate(&self, mutations: Vec<Mutation>) -> PortfolioResult<TransactionReceipt> {
        let token = self.write_token()?;
        if mutations.is_empty() {
            return Ok(TransactionReceipt::default());
        }

        let url = self.endpoint("data/mutate", true);
        let payload = json!({
            "mutations": mutations.iter().map(mutation_json).collect::<Vec<_>>()
        });
        info!(count = mutations.len(), "Committing store transaction");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .query(&[("returnIds", "true"), ("visibility", "sync")])
            .json(&payload)
            .send()
            .await?;
        let body: MutateResponse = Self::check(response).await?.json().await?;

        let affected: HashSet<&str> = body.results.iter().map(|r| r.id.as_str()).collect();

        // Deleting an unknown id is a silent no-op on the store side;
        // report it so callers do not drop a row that was never there.
        if let Some(missing) = mutations.iter().find_map(|m| match m {
            Mutation::Delete(id) if !affected.contains(id.as_str()) => Some(id.clone()),
            _ => None,
        }) {
            warn!(id = %missing, tx = %body.transaction_id, "Delete matched no document");
            return Err(PortfolioError::NotFound(missing.to_string()));
        }

        Ok(TransactionReceipt {
            created: body
                .results
                .iter()
                .filter(|r| r.operation.as_deref() == Some("create"))
                .map(|r| ProjectId::new(r.id.clone()))
                .collect(),
            affected: body
                .results
                .iter()
                .map(|r| ProjectId::new(r.id.clone()))
                .collect(),
            transaction_id: body.transaction_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProjectDocument;
    use crate::types::Category;

    #[test]
    fn test_create_json_shape() {
        let value = mutation_json(&Mutation::Create(ProjectDocument {
            title: "T".into(),
            category: Category::Events,
            description: String::new(),
            image: AssetRef::new("image-a-1x1-jpg"),
            published: true,
        }));
        assert_eq!(value["create"]["_type"], "project");
        assert_eq!(value["create"]["category"], "events");
        assert_eq!(value["create"]["image"]["asset"]["_ref"], "image-a-1x1-jpg");
    }

    #[test]
    fn test_patch_json_only_sets_given_fields() {
        let value = mutation_json(&Mutation::set_order("p1".into(), 4));
        assert_eq!(value, json!({ "patch": { "id": "p1", "set": { "order": 4 } } }));
    }

    #[test]
    fn test_error_body_description() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":{"description":"Insufficient permissions","type":"httpError"}}"#)
                .unwrap();
        assert_eq!(body.describe().as_deref(), Some("Insufficient permissions"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Unauthorized","message":"Session not found"}"#).unwrap();
        assert_eq!(body.describe().as_deref(), Some("Session not found"));
    }

    #[test]
    fn test_endpoint_paths() {
        let store = SanityStore::new(StoreConfig::default()).unwrap();
        assert_eq!(
            store.endpoint("data/query", false),
            "https://38uy7m8l.apicdn.sanity.io/v2023-10-01/data/query/production"
        );
        assert_eq!(
            store.endpoint("data/mutate", true),
            "https://38uy7m8l.api.sanity.io/v2023-10-01/data/mutate/production"
        );
    }

    #[tokio::test]
    async fn test_writes_require_token() {
        let store = SanityStore::new(StoreConfig::default()).unwrap();
        let err = store.delete_project(&"p1".into()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::NotConfigured));
    }
}
