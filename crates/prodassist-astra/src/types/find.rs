//! `find` command request and response shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AstraDocument;

/// Top-level envelope for a `find` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindRequest {
    /// The command body.
    pub find: FindCommand,
}

impl FindRequest {
    /// Builds a vector similarity query for the given embedding.
    pub fn similarity(vector: Vec<f32>, limit: usize) -> Self {
        let mut sort = BTreeMap::new();
        sort.insert("$vector".to_owned(), vector);

        Self {
            find: FindCommand {
                sort,
                options: FindOptions {
                    limit,
                    include_similarity: true,
                },
            },
        }
    }
}

/// Body of a `find` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindCommand {
    /// Sort clause; similarity queries sort on `$vector`.
    pub sort: BTreeMap<String, Vec<f32>>,

    /// Result options.
    pub options: FindOptions,
}

/// Options for a `find` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    /// Maximum number of documents to return.
    pub limit: usize,

    /// Ask the service to attach `$similarity` to each document.
    pub include_similarity: bool,
}

/// Response envelope returned by the Data API.
///
/// A response carries `data` on success, `errors` on failure, and may carry
/// both for partial failures; callers must check `errors` first.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Result payload.
    #[serde(default)]
    pub data: Option<FindData>,

    /// Errors reported by the service.
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

/// The `data` member of a `find` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindData {
    /// Matched documents, most similar first.
    #[serde(default)]
    pub documents: Vec<AstraDocument>,

    /// Pagination cursor; unused by similarity queries.
    #[serde(default)]
    pub next_page_state: Option<String>,
}

/// A single error entry from the Data API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Machine-readable error code.
    #[serde(default)]
    pub error_code: Option<String>,
}

impl std::fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_request_serializes_to_data_api_shape() {
        let request = FindRequest::similarity(vec![1.0, 0.5, 0.25], 3);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "find": {
                    "sort": { "$vector": [1.0, 0.5, 0.25] },
                    "options": { "limit": 3, "includeSimilarity": true }
                }
            })
        );
    }

    #[test]
    fn parses_success_response() {
        let response: ApiResponse = serde_json::from_value(serde_json::json!({
            "data": {
                "documents": [
                    { "_id": "a", "content": "first" },
                    { "_id": "b", "content": "second" }
                ],
                "nextPageState": null
            }
        }))
        .unwrap();

        let data = response.data.unwrap();
        assert_eq!(data.documents.len(), 2);
        assert!(response.errors.is_none());
    }

    #[test]
    fn parses_error_response() {
        let response: ApiResponse = serde_json::from_value(serde_json::json!({
            "errors": [
                { "message": "collection does not exist", "errorCode": "COLLECTION_NOT_EXIST" }
            ]
        }))
        .unwrap();

        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "COLLECTION_NOT_EXIST: collection does not exist"
        );
    }
}
