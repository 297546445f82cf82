// openchannel/src/cli/accounts.rs
use clap::Args;
use openchannel_common::error::Result;
use openchannel_net::Client;

use super::{parse_query, print_json};

#[derive(Args, Debug)]
pub struct DeveloperInfo {
    pub id: String,
}

impl DeveloperInfo {
    pub fn run(&self, client: &Client) -> Result<()> {
        print_json(&client.get_developer(&self.id)?)
    }
}

#[derive(Args, Debug)]
pub struct Developers {
    #[arg(long)]
    pub query: Option<String>,
    /// List developer groups instead of developers
    #[arg(long)]
    pub groups: bool,
}

impl Developers {
    pub fn run(&self, client: &Client) -> Result<()> {
        let query = parse_query(self.query.as_deref())?;
        if self.groups {
            print_json(&client.list_developer_groups(query.as_ref())?)
        } else {
            print_json(&client.list_developers(query.as_ref())?)
        }
    }
}

#[derive(Args, Debug)]
pub struct UserInfo {
    pub id: String,
}

impl UserInfo {
    pub fn run(&self, client: &Client) -> Result<()> {
        print_json(&client.get_user(&self.id)?)
    }
}

#[derive(Args, Debug)]
pub struct Users {
    #[arg(long)]
    pub query: Option<String>,
    /// List user groups instead of users
    #[arg(long)]
    pub groups: bool,
}

impl Users {
    pub fn run(&self, client: &Client) -> Result<()> {
        let query = parse_query(self.query.as_deref())?;
        if self.groups {
            print_json(&client.list_user_groups(query.as_ref())?)
        } else {
            print_json(&client.list_users(query.as_ref())?)
        }
    }
}
