// openchannel-net/src/client/apps.rs
use openchannel_common::error::Result;
use openchannel_common::model::{App, Id};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{query_param, require, Client};
use crate::transport::Transport;

const DEFAULT_SEARCH_FIELDS: [&str; 3] = ["name", "customData.summary", "customData.description"];

/// Suspension toggle accepted by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatusAction {
    Suspend,
    Unsuspend,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest<'a> {
    version: u32,
    developer_id: &'a Id,
    auto_approve: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LiveVersionRequest<'a> {
    version: u32,
    developer_id: &'a Id,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusChangeRequest<'a> {
    status: AppStatusAction,
    reason: &'a str,
    developer_id: &'a Id,
}

fn approved() -> Value {
    json!({"status.value": "approved"})
}

fn randomized() -> String {
    json!({"randomize": 1}).to_string()
}

impl<T: Transport> Client<T> {
    fn user_param(&self) -> (&'static str, String) {
        ("userId", self.config().user_id.to_string())
    }

    fn developer_param(&self) -> (&'static str, String) {
        ("developerId", self.config().developer_id.to_string())
    }

    /// Apps visible to the acting user; `query` defaults to approved apps.
    pub fn list_apps(&self, query: Option<&Value>) -> Result<Vec<App>> {
        let url = self.url(
            &["apps"],
            &[
                ("query", query_param(query, approved())?),
                ("sort", randomized()),
                self.user_param(),
            ],
        )?;
        self.get_list(url)
    }

    /// Free-text search over `fields` (by default name, summary and description).
    pub fn search_apps(
        &self,
        text: &str,
        query: Option<&Value>,
        fields: Option<&[&str]>,
    ) -> Result<Vec<App>> {
        let fields = fields.unwrap_or(&DEFAULT_SEARCH_FIELDS);
        let url = self.url(
            &["apps"],
            &[
                ("query", query_param(query, approved())?),
                ("textSearch", text.to_string()),
                ("fields", serde_json::to_string(fields)?),
                self.user_param(),
            ],
        )?;
        self.get_list(url)
    }

    pub fn get_app(&self, app_id: &str) -> Result<App> {
        let url = self.url(&["apps", app_id], &[self.user_param()])?;
        self.get_one(url)
    }

    pub fn get_app_by_safe_name(&self, safe_name: &str) -> Result<App> {
        let url = self.url(&["apps", "bySafeName", safe_name], &[self.user_param()])?;
        self.get_one(url)
    }

    pub fn get_app_version(&self, app_id: &str, version: u32) -> Result<App> {
        let version = version.to_string();
        let url = self.url(
            &["apps", app_id, "versions", version.as_str()],
            &[self.developer_param()],
        )?;
        self.get_one(url)
    }

    /// Versions owned by the acting developer; `query` defaults to approved ones.
    pub fn list_app_versions(&self, query: Option<&Value>) -> Result<Vec<App>> {
        let url = self.url(
            &["apps", "versions"],
            &[
                ("query", query_param(query, approved())?),
                ("sort", randomized()),
                self.developer_param(),
            ],
        )?;
        self.get_list(url)
    }

    pub fn create_app(&self, app: &App) -> Result<App> {
        let url = self.url(&["apps"], &[self.developer_param()])?;
        self.post_record(url, app)
    }

    /// Saves `app` as a new draft of `version`.
    pub fn update_app(&self, app: &App, version: u32) -> Result<App> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let version = version.to_string();
        let url = self.url(
            &["apps", app_id, "versions", version.as_str()],
            &[self.developer_param()],
        )?;
        self.post_record(url, app)
    }

    pub fn publish_app_version(&self, app: &App, version: u32, auto_approve: bool) -> Result<()> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let url = self.url(&["apps", app_id, "publish"], &[])?;
        let payload = PublishRequest {
            version,
            developer_id: &self.config().developer_id,
            auto_approve,
        };
        self.post_json(url, &payload)?;
        debug!("Published version {} of app {}", version, app_id);
        Ok(())
    }

    pub fn delete_app(&self, app: &App) -> Result<()> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let url = self.url(&["apps", app_id], &[self.developer_param()])?;
        self.delete(url)
    }

    pub fn delete_app_version(&self, app: &App, version: u32) -> Result<()> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let version = version.to_string();
        let url = self.url(
            &["apps", app_id, "versions", version.as_str()],
            &[self.developer_param()],
        )?;
        self.delete(url)
    }

    /// Makes a previously published `version` the live one.
    pub fn change_live_version(&self, app: &App, version: u32) -> Result<()> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let url = self.url(&["apps", app_id, "live"], &[])?;
        let payload = LiveVersionRequest {
            version,
            developer_id: &self.config().developer_id,
        };
        self.post_json(url, &payload)?;
        Ok(())
    }

    pub fn change_app_status(
        &self,
        app: &App,
        status: AppStatusAction,
        reason: &str,
    ) -> Result<()> {
        let app_id = require(&app.app_id, "appId")?.as_str();
        let url = self.url(&["apps", app_id, "status"], &[])?;
        let payload = StatusChangeRequest {
            status,
            reason,
            developer_id: &self.config().developer_id,
        };
        self.post_json(url, &payload)?;
        debug!("Changed status of app {} to {:?}", app_id, status);
        Ok(())
    }
}
