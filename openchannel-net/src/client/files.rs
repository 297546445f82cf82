// openchannel-net/src/client/files.rs
use openchannel_common::error::Result;
use openchannel_common::model::{File, Record};
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use super::Client;
use crate::transport::{RequestBody, Transport};

#[derive(Serialize)]
struct UrlUploadRequest<'a> {
    url: &'a str,
}

impl<T: Transport> Client<T> {
    /// Uploads raw bytes as a multipart form with a single part named `filename`.
    pub fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<File> {
        debug!("Uploading {} ({} bytes)", filename, bytes.len());
        let url = self.url(&["files"], &[])?;
        let body = self.execute(
            Method::POST,
            url,
            RequestBody::Multipart {
                filename: filename.to_string(),
                bytes,
            },
        )?;
        File::parse_str(&body)
    }

    /// Registers a remotely hosted asset as a file resource.
    pub fn upload_url(&self, file_url: &str) -> Result<File> {
        let url = self.url(&["files", "url"], &[])?;
        let body = self.post_json(url, &UrlUploadRequest { url: file_url })?;
        File::parse_str(&body)
    }
}
