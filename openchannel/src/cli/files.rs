// openchannel/src/cli/files.rs
use std::fs;
use std::path::PathBuf;

use clap::Args;
use openchannel_common::error::{OcError, Result};
use openchannel_net::Client;

use super::print_json;

#[derive(Args, Debug)]
pub struct Upload {
    pub path: PathBuf,
    /// Name to store the file under (default: the file's own name)
    #[arg(long)]
    pub name: Option<String>,
}

impl Upload {
    pub fn run(&self, client: &Client) -> Result<()> {
        let filename = match &self.name {
            Some(name) => name.clone(),
            None => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    OcError::ValidationError(format!(
                        "Cannot derive a file name from {}",
                        self.path.display()
                    ))
                })?,
        };
        let bytes = fs::read(&self.path)?;
        print_json(&client.upload_file(&filename, bytes)?)
    }
}

#[derive(Args, Debug)]
pub struct UploadUrl {
    pub url: String,
}

impl UploadUrl {
    pub fn run(&self, client: &Client) -> Result<()> {
        print_json(&client.upload_url(&self.url)?)
    }
}
