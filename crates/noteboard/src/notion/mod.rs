//! Notion API client used for note sync.

mod client;

pub use client::NotionClient;
