// openchannel/src/cli/apps.rs
use clap::Args;
use colored::Colorize;
use openchannel_common::error::Result;
use openchannel_common::model::App;
use openchannel_net::Client;
use prettytable::{format, Cell, Row, Table};

use super::{parse_query, print_json};

#[derive(Args, Debug)]
pub struct Apps {
    /// JSON filter; defaults to approved apps
    #[arg(long)]
    pub query: Option<String>,
    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Apps {
    pub fn run(&self, client: &Client) -> Result<()> {
        let query = parse_query(self.query.as_deref())?;
        let apps = client.list_apps(query.as_ref())?;
        if self.json {
            print_json(&apps)
        } else {
            print_app_table(&apps);
            Ok(())
        }
    }
}

#[derive(Args, Debug)]
pub struct Search {
    pub text: String,
    #[arg(long)]
    pub query: Option<String>,
    /// Fields to search, repeatable
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

impl Search {
    pub fn run(&self, client: &Client) -> Result<()> {
        tracing::debug!("Searching apps matching: {}", self.text);
        let query = parse_query(self.query.as_deref())?;
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        let fields = (!fields.is_empty()).then_some(fields.as_slice());
        let apps = client.search_apps(&self.text, query.as_ref(), fields)?;
        print_app_table(&apps);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AppInfo {
    /// App id, or safe name with --safe-name
    pub id: String,
    #[arg(long)]
    pub safe_name: bool,
    /// Fetch this version as the acting developer
    #[arg(long, conflicts_with = "safe_name")]
    pub app_version: Option<u32>,
}

impl AppInfo {
    pub fn run(&self, client: &Client) -> Result<()> {
        let app = if self.safe_name {
            client.get_app_by_safe_name(&self.id)?
        } else if let Some(version) = self.app_version {
            client.get_app_version(&self.id, version)?
        } else {
            client.get_app(&self.id)?
        };
        print_json(&app)
    }
}

#[derive(Args, Debug)]
pub struct Versions {
    #[arg(long)]
    pub query: Option<String>,
}

impl Versions {
    pub fn run(&self, client: &Client) -> Result<()> {
        let query = parse_query(self.query.as_deref())?;
        print_app_table(&client.list_app_versions(query.as_ref())?);
        Ok(())
    }
}

fn print_app_table(apps: &[App]) {
    if apps.is_empty() {
        println!("{}", "No apps found.".yellow());
        return;
    }

    let mut tbl = Table::new();
    tbl.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    tbl.set_titles(Row::new(vec![
        Cell::new("ID").style_spec("b"),
        Cell::new("Name").style_spec("b"),
        Cell::new("Version").style_spec("b"),
        Cell::new("Status").style_spec("b"),
    ]));
    for app in apps {
        let version = app
            .version_number()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let status = app.status_value().unwrap_or("-");
        tbl.add_row(Row::new(vec![
            Cell::new(app.app_id.as_deref().unwrap_or("-")).style_spec("Fb"),
            Cell::new(app.name.as_deref().unwrap_or("")),
            Cell::new(&version),
            Cell::new(status).style_spec(if status == "approved" { "Fg" } else { "Fy" }),
        ]));
    }
    tbl.printstd();
}
