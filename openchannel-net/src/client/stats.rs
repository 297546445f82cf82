// openchannel-net/src/client/stats.rs
use openchannel_common::error::Result;
use openchannel_common::model::Stats;
use reqwest::Method;
use serde_json::{json, Value};

use super::{query_param, Client};
use crate::transport::{RequestBody, Transport};

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;
const DEFAULT_TOTAL_FIELDS: [&str; 2] = ["views", "downloads"];
const DEFAULT_SERIES_FIELD: &str = "downloads";

/// A statistics time range in epoch milliseconds. Unset bounds resolve
/// against the client clock: `end` to now, `start` to 24 hours before now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsWindow {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl StatsWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn resolve(&self, now_millis: i64) -> (i64, i64) {
        (
            self.start.unwrap_or(now_millis - DAY_MILLIS),
            self.end.unwrap_or(now_millis),
        )
    }
}

impl<T: Transport> Client<T> {
    fn window_params(&self, window: StatsWindow) -> [(&'static str, String); 2] {
        let (start, end) = window.resolve(self.now_millis());
        [("start", start.to_string()), ("end", end.to_string())]
    }

    /// Totals of `fields` (default `views`, `downloads`) over `window`.
    pub fn get_stats_total(
        &self,
        window: StatsWindow,
        query: Option<&Value>,
        fields: Option<&[&str]>,
    ) -> Result<Stats> {
        let [start, end] = self.window_params(window);
        let fields = fields.unwrap_or(&DEFAULT_TOTAL_FIELDS).join(",");
        let url = self.url(
            &["stats", "total"],
            &[
                ("query", query_param(query, json!({}))?),
                start,
                end,
                ("fields", fields),
            ],
        )?;
        self.get_one(url)
    }

    /// Daily values of one `field` (default `downloads`) over `window`. The
    /// response is returned as the server sent it.
    pub fn get_stats_series(
        &self,
        window: StatsWindow,
        query: Option<&Value>,
        field: Option<&str>,
    ) -> Result<Value> {
        let [start, end] = self.window_params(window);
        let field = field.unwrap_or(DEFAULT_SERIES_FIELD);
        let url = self.url(
            &["stats", "series", "day", field],
            &[("query", query_param(query, json!({}))?), start, end],
        )?;
        let body = self.execute(Method::GET, url, RequestBody::Empty)?;
        Ok(serde_json::from_str(&body)?)
    }
}
