// openchannel/src/cli/ownership.rs
use clap::Args;
use colored::Colorize;
use openchannel_common::error::Result;
use openchannel_common::model::{App, Id, Model, User};
use openchannel_net::Client;

use super::{parse_query, print_json};

#[derive(Args, Debug)]
pub struct OwnershipInfo {
    pub id: String,
}

impl OwnershipInfo {
    pub fn run(&self, client: &Client) -> Result<()> {
        print_json(&client.get_ownership(&self.id)?)
    }
}

#[derive(Args, Debug)]
pub struct Ownerships {
    #[arg(long)]
    pub query: Option<String>,
}

impl Ownerships {
    pub fn run(&self, client: &Client) -> Result<()> {
        let query = parse_query(self.query.as_deref())?;
        print_json(&client.list_ownership(query.as_ref())?)
    }
}

#[derive(Args, Debug)]
pub struct Install {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub app: String,
    #[arg(long)]
    pub model: String,
}

impl Install {
    pub fn run(&self, client: &Client) -> Result<()> {
        let user = User::with_id(Id::parse_lossy(&self.user));
        let ownership = client.install_app(
            &user,
            &App::with_id(self.app.as_str()),
            &Model::with_id(self.model.as_str()),
        )?;
        eprintln!(
            "{} {} for user {}",
            "Installed".green().bold(),
            self.app,
            self.user
        );
        print_json(&ownership)
    }
}
