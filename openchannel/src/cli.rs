// openchannel/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser, Subcommand};
use openchannel_common::error::{OcError, Result};
use openchannel_net::Client;
use serde::Serialize;
use serde_json::Value;

pub mod accounts;
pub mod apps;
pub mod files;
pub mod ownership;
pub mod stats;

use crate::cli::accounts::{DeveloperInfo, Developers, UserInfo, Users};
use crate::cli::apps::{AppInfo, Apps, Search, Versions};
use crate::cli::files::{Upload, UploadUrl};
use crate::cli::ownership::{Install, OwnershipInfo, Ownerships};
use crate::cli::stats::{Series, Total};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "oc", bin_name = "oc")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List apps visible to the acting user
    Apps(Apps),
    /// Full-text search over apps
    Search(Search),
    /// Show one app
    App(AppInfo),
    /// List app versions of the acting developer
    Versions(Versions),
    Developer(DeveloperInfo),
    Developers(Developers),
    User(UserInfo),
    Users(Users),
    Ownership(OwnershipInfo),
    Ownerships(Ownerships),
    /// Install an app for a user under a pricing model
    Install(Install),
    /// Statistics totals
    Stats(Total),
    /// Daily statistics series for one field
    Series(Series),
    /// Upload a local file
    Upload(Upload),
    /// Register a remote URL as a file
    UploadUrl(UploadUrl),
}

impl Command {
    pub fn run(&self, client: &Client) -> Result<()> {
        match self {
            Self::Apps(command) => command.run(client),
            Self::Search(command) => command.run(client),
            Self::App(command) => command.run(client),
            Self::Versions(command) => command.run(client),
            Self::Developer(command) => command.run(client),
            Self::Developers(command) => command.run(client),
            Self::User(command) => command.run(client),
            Self::Users(command) => command.run(client),
            Self::Ownership(command) => command.run(client),
            Self::Ownerships(command) => command.run(client),
            Self::Install(command) => command.run(client),
            Self::Stats(command) => command.run(client),
            Self::Series(command) => command.run(client),
            Self::Upload(command) => command.run(client),
            Self::UploadUrl(command) => command.run(client),
        }
    }
}

/// Parses a `--query` argument as a JSON filter.
pub fn parse_query(raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(text)
            .map_err(|e| OcError::ValidationError(format!("--query is not valid JSON: {e}")))
    })
    .transpose()
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
