// openchannel-net/src/client/ownership.rs
use openchannel_common::error::{OcError, Result};
use openchannel_common::model::{App, Id, Model, Ownership, Record, User};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{query_param, require, Client};
use crate::transport::Transport;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InstallRequest<'a> {
    app_id: &'a str,
    user_id: &'a Id,
    model_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UninstallRequest<'a> {
    user_id: &'a Id,
}

impl<T: Transport> Client<T> {
    /// Gives `user` ownership of `app` under the pricing `model`.
    pub fn install_app(&self, user: &User, app: &App, model: &Model) -> Result<Ownership> {
        let payload = InstallRequest {
            app_id: require(&app.app_id, "appId")?,
            user_id: require(&user.user_id, "userId")?,
            model_id: model.model_id().ok_or(OcError::MissingField("modelId"))?,
        };
        let url = self.url(&["ownership", "install"], &[])?;
        let body = self.post_json(url, &payload)?;
        Ownership::parse_str(&body)
    }

    pub fn get_ownership(&self, ownership_id: &str) -> Result<Ownership> {
        let url = self.url(&["ownership", ownership_id], &[])?;
        self.get_one(url)
    }

    pub fn list_ownership(&self, query: Option<&Value>) -> Result<Vec<Ownership>> {
        let url = self.url(
            &["ownership"],
            &[
                ("query", query_param(query, json!({}))?),
                ("sort", json!({"date": 1}).to_string()),
            ],
        )?;
        self.get_list(url)
    }

    pub fn uninstall_app(&self, ownership: &Ownership) -> Result<()> {
        let ownership_id = require(&ownership.ownership_id, "ownershipId")?.as_str();
        let payload = UninstallRequest {
            user_id: require(&ownership.user_id, "userId")?,
        };
        let url = self.url(&["ownership", "uninstall", ownership_id], &[])?;
        self.post_json(url, &payload)?;
        Ok(())
    }

    pub fn update_ownership(&self, ownership: &Ownership) -> Result<Ownership> {
        let ownership_id = require(&ownership.ownership_id, "ownershipId")?.as_str();
        let url = self.url(&["ownership", ownership_id], &[])?;
        let updated: Ownership = self.post_record(url, ownership)?;
        debug!("Updated ownership {}: {:?}", ownership_id, updated);
        Ok(updated)
    }
}
