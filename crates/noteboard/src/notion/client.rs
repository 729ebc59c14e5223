use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use noteboard_core::export::{html_to_notion_blocks, NotionBlock, MAX_TEXT_LENGTH};
use noteboard_core::note::Note;
use noteboard_core::sync::{PagePublisher, SyncError, SyncTarget};

/// Creates pages in a Notion database over the public REST API.
#[derive(Clone)]
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct CreatePage<'a> {
    parent: Parent<'a>,
    properties: Properties,
    children: Vec<NotionBlock>,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
struct Properties {
    title: TitleProperty,
}

#[derive(Debug, Serialize)]
struct TitleProperty {
    title: Vec<TitleText>,
}

#[derive(Debug, Serialize)]
struct TitleText {
    text: TitleContent,
}

#[derive(Debug, Serialize)]
struct TitleContent {
    content: String,
}

#[derive(Debug, Deserialize)]
struct CreatedPage {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl NotionClient {
    /// Creates a client for the API at `base_url` (e.g. `https://api.notion.com/v1`).
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            version: version.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Parse a create-page response, mapping failures to [`SyncError`].
    async fn handle_response(&self, response: reqwest::Response) -> Result<String, SyncError> {
        let status = response.status();
        if status.is_success() {
            let page: CreatedPage = response
                .json()
                .await
                .map_err(|e| SyncError::InvalidResponse(e.to_string()))?;
            Ok(page.id)
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(text);
            Err(SyncError::Upstream {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn page_payload<'a>(note: &Note, target: &'a SyncTarget) -> CreatePage<'a> {
    let chars: Vec<char> = note.title.chars().collect();
    let title = chars
        .chunks(MAX_TEXT_LENGTH)
        .map(|chunk| TitleText {
            text: TitleContent {
                content: chunk.iter().collect(),
            },
        })
        .collect();

    CreatePage {
        parent: Parent {
            database_id: &target.database_id,
        },
        properties: Properties {
            title: TitleProperty { title },
        },
        children: html_to_notion_blocks(&note.content),
    }
}

#[async_trait]
impl PagePublisher for NotionClient {
    async fn publish(&self, note: &Note, target: &SyncTarget) -> Result<String, SyncError> {
        let payload = page_payload(note, target);

        let response = self
            .client
            .post(self.url("/pages"))
            .bearer_auth(&target.token)
            .header("Notion-Version", &self.version)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SyncError::Request(e.to_string()))?;

        self.handle_response(response).await
    }
}
