//! Nexus Mods GraphQL revision source.
//!
//! Collections are addressed by slug; each revision lists mod files, most of
//! which link to a parent mod. Requests authenticate with the `apikey`
//! header and identify the application with `Application-Name` and
//! `Application-Version`.

use std::time::Instant;

use async_trait::async_trait;
use modiff_core::errors::{ModiffError, Result};
use modiff_core::model::{ParentRef, RawRecord};
use modiff_core::{log_op_end, log_op_error, log_op_start};
use modiff_core_types::Sensitive;
use reqwest::Client;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{json, Value};

use crate::config::NexusConfig;
use crate::fetch::RevisionSource;

const GRAPHQL_PATH: &str = "/v2/graphql";

const COLLECTION_REVISION_QUERY: &str = r#"
query CollectionRevisionMods($slug: String!, $revision: Int, $viewAdultContent: Boolean) {
  collectionRevision(slug: $slug, revision: $revision, viewAdultContent: $viewAdultContent) {
    modFiles {
      fileId
      file {
        fileId
        name
        version
        mod {
          modId
          name
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    /// Kept as the upstream wrote it
    #[serde(default)]
    errors: Option<Box<RawValue>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    collection_revision: Option<CollectionRevision>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionRevision {
    mod_files: Option<Vec<ModFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModFile {
    file_id: Option<Value>,
    file: Option<FileNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileNode {
    file_id: Option<Value>,
    name: Option<String>,
    version: Option<String>,
    #[serde(rename = "mod")]
    parent: Option<ModNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModNode {
    mod_id: Option<Value>,
    name: Option<String>,
}

/// Ids arrive as numbers or strings depending on the field; both compare as text.
fn id_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ModFile {
    fn into_record(self) -> RawRecord {
        let outer_id = id_text(self.file_id.as_ref());
        match self.file {
            Some(file) => RawRecord {
                id: id_text(file.file_id.as_ref()).or(outer_id),
                name: file.name,
                version: file.version,
                parent: file.parent.map(|m| ParentRef {
                    id: id_text(m.mod_id.as_ref()),
                    name: m.name,
                }),
            },
            None => RawRecord {
                id: outer_id,
                ..RawRecord::default()
            },
        }
    }
}

fn remote(collection_id: &str, revision: u32, payload: impl Into<String>) -> ModiffError {
    ModiffError::Remote {
        collection_id: collection_id.to_string(),
        revision,
        payload: payload.into(),
    }
}

/// Decode a GraphQL response body into raw records.
///
/// A non-empty `errors` array, a body that is not JSON, or a missing
/// `collectionRevision.modFiles` is a `Remote` error. The payload is passed
/// through verbatim.
pub fn parse_revision_response(
    collection_id: &str,
    revision: u32,
    body: &str,
) -> Result<Vec<RawRecord>> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|_| remote(collection_id, revision, body))?;

    if let Some(errors) = &response.errors {
        let empty = serde_json::from_str::<Vec<Value>>(errors.get()).is_ok_and(|a| a.is_empty());
        if !empty {
            return Err(remote(collection_id, revision, errors.get()));
        }
    }

    let mod_files = response
        .data
        .and_then(|d| d.collection_revision)
        .and_then(|r| r.mod_files)
        .ok_or_else(|| remote(collection_id, revision, body))?;

    Ok(mod_files.into_iter().map(ModFile::into_record).collect())
}

/// HTTP client for the Nexus Mods v2 GraphQL API
pub struct NexusClient {
    http: Client,
    endpoint: String,
    api_key: Sensitive<String>,
    app_name: String,
    app_version: String,
}

impl NexusClient {
    /// Build a client from config, sharing the given HTTP client.
    pub fn new(config: &NexusConfig, http: Client) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", config.api_url.trim_end_matches('/'), GRAPHQL_PATH),
            api_key: config.api_key.clone(),
            app_name: config.app_name.clone(),
            app_version: config.app_version.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_query(&self, collection_id: &str, revision: u32) -> Result<Vec<RawRecord>> {
        let payload = json!({
            "query": COLLECTION_REVISION_QUERY,
            "variables": {
                "slug": collection_id,
                "revision": revision,
                "viewAdultContent": true,
            },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header("apikey", self.api_key.expose())
            .header("Application-Name", &self.app_name)
            .header("Application-Version", &self.app_version)
            .json(&payload)
            .send()
            .await
            .map_err(|e| remote(collection_id, revision, format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            remote(
                collection_id,
                revision,
                format!("failed to read response body: {}", e),
            )
        })?;

        if !status.is_success() {
            return Err(remote(
                collection_id,
                revision,
                format!("HTTP {}: {}", status.as_u16(), body),
            ));
        }

        parse_revision_response(collection_id, revision, &body)
    }
}

#[async_trait]
impl RevisionSource for NexusClient {
    async fn fetch_revision(&self, collection_id: &str, revision: u32) -> Result<Vec<RawRecord>> {
        let start = Instant::now();
        log_op_start!("fetch_revision", collection_id = collection_id, revision = revision);

        match self.post_query(collection_id, revision).await {
            Ok(records) => {
                log_op_end!(
                    "fetch_revision",
                    duration_ms = start.elapsed().as_millis() as u64,
                    collection_id = collection_id,
                    revision = revision,
                    record_count = records.len()
                );
                Ok(records)
            }
            Err(err) => {
                log_op_error!(
                    "fetch_revision",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}
