// openchannel/src/cli/stats.rs
use clap::Args;
use openchannel_common::error::Result;
use openchannel_net::{Client, StatsWindow};

use super::{parse_query, print_json};

#[derive(Args, Debug)]
pub struct Total {
    /// Window start in epoch milliseconds (default: 24 hours ago)
    #[arg(long)]
    pub start: Option<i64>,
    /// Window end in epoch milliseconds (default: now)
    #[arg(long)]
    pub end: Option<i64>,
    #[arg(long)]
    pub query: Option<String>,
    /// Comma-separated fields (default: views,downloads)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

impl Total {
    pub fn run(&self, client: &Client) -> Result<()> {
        let window = StatsWindow {
            start: self.start,
            end: self.end,
        };
        let query = parse_query(self.query.as_deref())?;
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        let fields = (!fields.is_empty()).then_some(fields.as_slice());
        print_json(&client.get_stats_total(window, query.as_ref(), fields)?)
    }
}

#[derive(Args, Debug)]
pub struct Series {
    /// Field to chart (default: downloads)
    #[arg(long)]
    pub field: Option<String>,
    #[arg(long)]
    pub start: Option<i64>,
    #[arg(long)]
    pub end: Option<i64>,
    #[arg(long)]
    pub query: Option<String>,
}

impl Series {
    pub fn run(&self, client: &Client) -> Result<()> {
        let window = StatsWindow {
            start: self.start,
            end: self.end,
        };
        let query = parse_query(self.query.as_deref())?;
        print_json(&client.get_stats_series(window, query.as_ref(), self.field.as_deref())?)
    }
}
