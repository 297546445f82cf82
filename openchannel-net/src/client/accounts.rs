// openchannel-net/src/client/accounts.rs
// Developers, users and their groups. Create and update are one idempotent
// upsert on the remote side, so `create_*` simply forwards to `update_*`.
use openchannel_common::error::Result;
use openchannel_common::model::{Developer, DeveloperGroup, Record, User, UserGroup};
use serde_json::{json, Value};

use super::{query_param, require, Client};
use crate::transport::Transport;

impl<T: Transport> Client<T> {
    fn list_sorted_by_name<R: Record>(
        &self,
        segments: &[&str],
        query: Option<&Value>,
    ) -> Result<Vec<R>> {
        let url = self.url(
            segments,
            &[
                ("query", query_param(query, json!({}))?),
                ("sort", json!({"name": 1}).to_string()),
            ],
        )?;
        self.get_list(url)
    }

    pub fn get_developer(&self, developer_id: &str) -> Result<Developer> {
        let url = self.url(&["developers", developer_id], &[])?;
        self.get_one(url)
    }

    pub fn list_developers(&self, query: Option<&Value>) -> Result<Vec<Developer>> {
        self.list_sorted_by_name(&["developers"], query)
    }

    pub fn update_developer(&self, developer: &Developer) -> Result<Developer> {
        let developer_id = require(&developer.developer_id, "developerId")?.to_string();
        let url = self.url(&["developers", developer_id.as_str()], &[])?;
        self.post_record(url, developer)
    }

    pub fn create_developer(&self, developer: &Developer) -> Result<Developer> {
        self.update_developer(developer)
    }

    pub fn get_developer_group(&self, group_id: &str) -> Result<DeveloperGroup> {
        let url = self.url(&["developers", "groups", group_id], &[])?;
        self.get_one(url)
    }

    pub fn list_developer_groups(&self, query: Option<&Value>) -> Result<Vec<DeveloperGroup>> {
        self.list_sorted_by_name(&["developers", "groups"], query)
    }

    pub fn update_developer_group(&self, group: &DeveloperGroup) -> Result<DeveloperGroup> {
        let group_id = require(&group.group_id, "groupId")?.as_str();
        let url = self.url(&["developers", "groups", group_id], &[])?;
        self.post_record(url, group)
    }

    pub fn create_developer_group(&self, group: &DeveloperGroup) -> Result<DeveloperGroup> {
        self.update_developer_group(group)
    }

    pub fn get_user(&self, user_id: &str) -> Result<User> {
        let url = self.url(&["users", user_id], &[])?;
        self.get_one(url)
    }

    pub fn list_users(&self, query: Option<&Value>) -> Result<Vec<User>> {
        self.list_sorted_by_name(&["users"], query)
    }

    pub fn update_user(&self, user: &User) -> Result<User> {
        let user_id = require(&user.user_id, "userId")?.to_string();
        let url = self.url(&["users", user_id.as_str()], &[])?;
        self.post_record(url, user)
    }

    pub fn create_user(&self, user: &User) -> Result<User> {
        self.update_user(user)
    }

    pub fn get_user_group(&self, group_id: &str) -> Result<UserGroup> {
        let url = self.url(&["users", "groups", group_id], &[])?;
        self.get_one(url)
    }

    pub fn list_user_groups(&self, query: Option<&Value>) -> Result<Vec<UserGroup>> {
        self.list_sorted_by_name(&["users", "groups"], query)
    }

    pub fn update_user_group(&self, group: &UserGroup) -> Result<UserGroup> {
        let group_id = require(&group.group_id, "groupId")?.as_str();
        let url = self.url(&["users", "groups", group_id], &[])?;
        self.post_record(url, group)
    }

    pub fn create_user_group(&self, group: &UserGroup) -> Result<UserGroup> {
        self.update_user_group(group)
    }
}
