use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use openchannel_net::{
    ApiRequest, ApiResponse, App, AppStatusAction, Client, Config, Developer, DeveloperGroup,
    Field, FixedClock, Id, Model, OcError, Ownership, Record, RequestBody, Result, StatsWindow,
    Transport, User, UserGroup,
};
use reqwest::Method;
use serde_json::{json, Value};

/// Replays canned responses and records every request it is handed.
#[derive(Default)]
struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        let mock = Self::default();
        mock.push(Ok(ApiResponse::new(status, body)));
        mock
    }

    fn push(&self, response: Result<ApiResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn only_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}

const NOW: i64 = 1_700_000_000_000;

fn client(transport: MockTransport) -> Client<MockTransport> {
    let config = Config::new("mkt-1", "s3cret")
        .with_user_id(7)
        .with_developer_id("dev-9");
    Client::with_transport(config, transport)
        .unwrap()
        .with_clock(FixedClock(NOW))
}

fn query_of(request: &ApiRequest) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

fn json_body(request: &ApiRequest) -> Value {
    serde_json::from_str(request.json_body().expect("JSON body")).unwrap()
}

#[test]
fn list_apps_uses_approved_filter_and_acting_user() {
    let client = client(MockTransport::replying(
        200,
        r#"{"list":[{"appId":"a"},{"appId":"b"},{"appId":"c"}],"count":3}"#,
    ));

    let apps = client.list_apps(None).unwrap();

    let ids: Vec<_> = apps.iter().filter_map(|a| a.app_id.as_deref()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    let request = client.transport().only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url.path(), "/v2/apps");
    assert_eq!(request.body, RequestBody::Empty);
    assert_eq!(request.auth.username, "mkt-1");
    assert_eq!(request.auth.password, "s3cret");

    let query = query_of(&request);
    assert_eq!(query["query"], r#"{"status.value":"approved"}"#);
    assert_eq!(query["sort"], r#"{"randomize":1}"#);
    assert_eq!(query["userId"], "7");
}

#[test]
fn list_apps_accepts_a_custom_filter() {
    let client = client(MockTransport::replying(200, r#"{"list":[]}"#));
    let filter = json!({"status.value": "pending"});

    assert!(client.list_apps(Some(&filter)).unwrap().is_empty());
    let query = query_of(&client.transport().only_request());
    assert_eq!(query["query"], r#"{"status.value":"pending"}"#);
}

#[test]
fn search_apps_sends_text_and_default_fields() {
    let client = client(MockTransport::replying(200, r#"{"list":[{"appId":"x"}]}"#));

    let apps = client.search_apps("weather", None, None).unwrap();
    assert_eq!(apps.len(), 1);

    let query = query_of(&client.transport().only_request());
    assert_eq!(query["textSearch"], "weather");
    assert_eq!(
        query["fields"],
        r#"["name","customData.summary","customData.description"]"#
    );
    assert_eq!(query["userId"], "7");
    assert!(!query.contains_key("sort"));
}

#[test]
fn search_apps_with_custom_fields_and_filter() {
    let client = client(MockTransport::replying(200, r#"{"list":[]}"#));
    let filter = json!({"customData.category": "maps"});

    client
        .search_apps("rain", Some(&filter), Some(&["name", "customData.tags"][..]))
        .unwrap();

    let query = query_of(&client.transport().only_request());
    assert_eq!(query["textSearch"], "rain");
    assert_eq!(query["fields"], r#"["name","customData.tags"]"#);
    assert_eq!(query["query"], r#"{"customData.category":"maps"}"#);
}

#[test]
fn one_odd_app_does_not_fail_the_listing() {
    let client = client(MockTransport::replying(
        200,
        r#"{"list":[{"appId":"a","version":"2","model":[{"modelId":"m1","price":"9.99"}]},{"appId":"b","status":{"value":"approved","reason":{"code":3}}}]}"#,
    ));

    let apps = client.list_apps(None).unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].version_number(), Some(2));
    assert_eq!(apps[0].models()[0].price(), Some(&json!("9.99")));
    assert_eq!(apps[1].status_value(), Some("approved"));
}

#[test]
fn get_app_parses_body() {
    let client = client(MockTransport::replying(
        200,
        r#"{"appId":"abc","name":"Weather","status":{"value":"approved"},"rating":4}"#,
    ));

    let app = client.get_app("abc").unwrap();
    assert_eq!(app.name.as_deref(), Some("Weather"));
    assert!(app.status.get().unwrap().is("approved"));
    assert_eq!(app.extra.get("rating"), Some(&json!(4)));

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/apps/abc");
    assert_eq!(query_of(&request)["userId"], "7");
}

#[test]
fn non_200_status_carries_code_and_body_verbatim() {
    let client = client(MockTransport::replying(404, r#"{"error":"not found"}"#));

    match client.get_app("missing") {
        Err(OcError::Api { code, body }) => {
            assert_eq!(code, 404);
            assert_eq!(body, r#"{"error":"not found"}"#);
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[test]
fn other_success_codes_are_still_errors() {
    let client = client(MockTransport::replying(201, "created"));
    let err = client.create_app(&App::default()).unwrap_err();
    assert_eq!(err.status_code(), Some(201));
}

#[test]
fn transport_failures_propagate() {
    let transport = MockTransport::default();
    transport.push(Err(OcError::Config("connection refused".into())));
    let client = client(transport);

    assert!(matches!(
        client.list_users(None),
        Err(OcError::Config(msg)) if msg == "connection refused"
    ));
}

#[test]
fn app_lookups_by_safe_name_and_version() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"appId":"abc"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"appId":"abc","version":2}"#)));
    let client = client(transport);

    client.get_app_by_safe_name("weather-app").unwrap();
    let versioned = client.get_app_version("abc", 2).unwrap();
    assert_eq!(versioned.version_number(), Some(2));

    let requests = client.transport().requests();
    assert_eq!(requests[0].url.path(), "/v2/apps/bySafeName/weather-app");
    assert_eq!(query_of(&requests[0])["userId"], "7");
    assert_eq!(requests[1].url.path(), "/v2/apps/abc/versions/2");
    assert_eq!(query_of(&requests[1])["developerId"], "dev-9");
}

#[test]
fn list_app_versions_uses_acting_developer() {
    let client = client(MockTransport::replying(200, r#"{"list":[{"appId":"a","version":1}]}"#));

    let versions = client.list_app_versions(None).unwrap();
    assert_eq!(versions[0].version_number(), Some(1));

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/apps/versions");
    let query = query_of(&request);
    assert_eq!(query["developerId"], "dev-9");
    assert_eq!(query["sort"], r#"{"randomize":1}"#);
    assert!(!query.contains_key("userId"));
}

#[test]
fn create_app_posts_encoded_app_and_returns_server_copy() {
    let client = client(MockTransport::replying(
        200,
        r#"{"appId":"new-1","name":"Draft","customData":{"summary":"s"}}"#,
    ));
    let mut app = App::default();
    app.name.set("Draft");
    app.custom_data.insert("summary".into(), json!("s"));

    let created = client.create_app(&app).unwrap();
    assert_eq!(created.app_id.as_deref(), Some("new-1"));

    let request = client.transport().only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.path(), "/v2/apps");
    assert_eq!(query_of(&request)["developerId"], "dev-9");
    assert_eq!(
        json_body(&request),
        json!({"name": "Draft", "customData": {"summary": "s"}})
    );
}

#[test]
fn update_app_targets_version_and_needs_an_id() {
    let client = client(MockTransport::replying(200, r#"{"appId":"abc","version":3}"#));

    let err = client.update_app(&App::default(), 3).unwrap_err();
    assert!(matches!(err, OcError::MissingField("appId")));
    assert!(client.transport().requests().is_empty());

    let updated = client.update_app(&App::with_id("abc"), 3).unwrap();
    assert_eq!(updated.version, Field::Set(json!(3)));
    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/apps/abc/versions/3");
    assert_eq!(json_body(&request), json!({"appId": "abc", "customData": {}}));
}

#[test]
fn publish_and_live_version_bodies() {
    let client = client(MockTransport::default());
    let app = App::with_id("abc");

    client.publish_app_version(&app, 4, true).unwrap();
    client.change_live_version(&app, 3).unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests[0].url.path(), "/v2/apps/abc/publish");
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(
        requests[0].json_body(),
        Some(r#"{"version":4,"developerId":"dev-9","autoApprove":true}"#)
    );
    assert_eq!(requests[1].url.path(), "/v2/apps/abc/live");
    assert_eq!(
        requests[1].json_body(),
        Some(r#"{"version":3,"developerId":"dev-9"}"#)
    );
}

#[test]
fn change_status_sends_action_and_reason() {
    let client = client(MockTransport::default());

    client
        .change_app_status(&App::with_id("abc"), AppStatusAction::Suspend, "spam")
        .unwrap();

    let request = client.transport().only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.path(), "/v2/apps/abc/status");
    assert_eq!(
        request.json_body(),
        Some(r#"{"status":"suspend","reason":"spam","developerId":"dev-9"}"#)
    );
}

#[test]
fn deletes_use_delete_method() {
    let client = client(MockTransport::default());
    let app = App::with_id("abc");

    client.delete_app(&app).unwrap();
    client.delete_app_version(&app, 2).unwrap();

    let requests = client.transport().requests();
    assert!(requests.iter().all(|r| r.method == Method::DELETE));
    assert_eq!(requests[0].url.path(), "/v2/apps/abc");
    assert_eq!(requests[1].url.path(), "/v2/apps/abc/versions/2");
    assert_eq!(query_of(&requests[1])["developerId"], "dev-9");
}

#[test]
fn create_and_update_developer_are_the_same_call() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"developerId":"d-1","name":"Acme"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"developerId":"d-1","name":"Acme"}"#)));
    let client = client(transport);
    let mut dev = Developer::with_id("d-1");
    dev.name.set("Acme");

    let created = client.create_developer(&dev).unwrap();
    let updated = client.update_developer(&dev).unwrap();
    assert_eq!(created, updated);

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/v2/developers/d-1");
    }
    assert_eq!(requests[0].body, requests[1].body);
}

#[test]
fn create_and_update_user_use_numeric_id_in_path() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"userId":7,"name":"Ann"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"userId":7,"name":"Ann"}"#)));
    let client = client(transport);
    let mut user = User::with_id(7);
    user.name.set("Ann");

    let created = client.create_user(&user).unwrap();
    let updated = client.update_user(&user).unwrap();
    assert_eq!(created, updated);
    assert_eq!(updated.user_id.get(), Some(&Id::Num(7)));

    let requests = client.transport().requests();
    for request in &requests {
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/v2/users/7");
        assert_eq!(
            json_body(request),
            json!({"userId": 7, "name": "Ann", "customData": {}})
        );
    }

    let err = client.update_user(&User::default()).unwrap_err();
    assert!(matches!(err, OcError::MissingField("userId")));
    assert_eq!(client.transport().requests().len(), 2);
}

#[test]
fn developer_and_user_reads() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"developerId":"d-1"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"list":[{"userId":1},{"userId":"u-2"}]}"#)));
    let client = client(transport);

    client.get_developer("d-1").unwrap();
    let users = client.list_users(None).unwrap();
    assert_eq!(users[0].user_id, Field::Set(Id::Num(1)));
    assert_eq!(users[1].user_id, Field::Set(Id::from("u-2")));

    let requests = client.transport().requests();
    assert_eq!(requests[0].url.path(), "/v2/developers/d-1");
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.path(), "/v2/users");
    let query = query_of(&requests[1]);
    assert_eq!(query["query"], "{}");
    assert_eq!(query["sort"], r#"{"name":1}"#);
}

#[test]
fn group_endpoints() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"list":[]}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"groupId":"g-1"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"groupId":"g-1"}"#)));
    let client = client(transport);

    client.list_developer_groups(None).unwrap();
    client.get_developer_group("g-1").unwrap();
    let group = client.create_user_group(&UserGroup::with_id("g-1")).unwrap();
    assert_eq!(group.group_id.as_deref(), Some("g-1"));

    let requests = client.transport().requests();
    assert_eq!(requests[0].url.path(), "/v2/developers/groups");
    assert_eq!(requests[1].url.path(), "/v2/developers/groups/g-1");
    assert_eq!(requests[2].url.path(), "/v2/users/groups/g-1");
    assert_eq!(requests[2].method, Method::POST);
}

#[test]
fn user_group_reads_and_developer_group_upsert() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"list":[{"groupId":"u-g1"},{"groupId":"u-g2"}]}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"groupId":"u-g1","name":"Beta"}"#)));
    transport.push(Ok(ApiResponse::new(200, r#"{"groupId":"d-g1","customData":{"tier":1}}"#)));
    let client = client(transport);

    let filter = json!({"name": "Beta"});
    let groups = client.list_user_groups(Some(&filter)).unwrap();
    assert_eq!(groups.len(), 2);
    let group = client.get_user_group("u-g1").unwrap();
    assert_eq!(group.name.as_deref(), Some("Beta"));

    let mut dev_group = DeveloperGroup::with_id("d-g1");
    dev_group.custom_data.insert("tier".into(), json!(1));
    let saved = client.update_developer_group(&dev_group).unwrap();
    assert_eq!(saved, dev_group);

    let requests = client.transport().requests();
    assert_eq!(requests[0].url.path(), "/v2/users/groups");
    let query = query_of(&requests[0]);
    assert_eq!(query["query"], r#"{"name":"Beta"}"#);
    assert_eq!(query["sort"], r#"{"name":1}"#);
    assert_eq!(requests[1].method, Method::GET);
    assert_eq!(requests[1].url.path(), "/v2/users/groups/u-g1");
    assert_eq!(requests[2].method, Method::POST);
    assert_eq!(requests[2].url.path(), "/v2/developers/groups/d-g1");
    assert_eq!(
        json_body(&requests[2]),
        json!({"groupId": "d-g1", "customData": {"tier": 1}})
    );
}

#[test]
fn install_app_needs_a_model_id() {
    let client = client(MockTransport::default());
    let err = client
        .install_app(&User::with_id(7), &App::with_id("abc"), &Model::default())
        .unwrap_err();
    assert!(matches!(err, OcError::MissingField("modelId")));
    assert!(client.transport().requests().is_empty());
}

#[test]
fn install_app_reads_model_id_from_a_parsed_app() {
    let client = client(MockTransport::replying(200, r#"{"ownershipId":"o-2"}"#));
    let app = App::parse_str(
        r#"{"appId":"abc","model":[{"modelId":"m1","type":"free","price":"0"}]}"#,
    )
    .unwrap();

    client
        .install_app(&User::with_id("u-1"), &app, &app.models()[0])
        .unwrap();
    assert_eq!(
        client.transport().only_request().json_body(),
        Some(r#"{"appId":"abc","userId":"u-1","modelId":"m1"}"#)
    );
}

#[test]
fn install_app_sends_links_and_returns_ownership() {
    let client = client(MockTransport::replying(
        200,
        r#"{"ownershipId":"o-1","appId":"abc","userId":7,"modelId":"m1","ownershipStatus":"active"}"#,
    ));

    let ownership = client
        .install_app(&User::with_id(7), &App::with_id("abc"), &Model::with_id("m1"))
        .unwrap();

    assert_eq!(ownership.ownership_id.as_deref(), Some("o-1"));
    assert_eq!(ownership.user_id.get(), Some(&Id::Num(7)));

    let request = client.transport().only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url.path(), "/v2/ownership/install");
    assert_eq!(
        request.json_body(),
        Some(r#"{"appId":"abc","userId":7,"modelId":"m1"}"#)
    );
}

#[test]
fn ownership_list_uninstall_and_update() {
    let transport = MockTransport::default();
    transport.push(Ok(ApiResponse::new(200, r#"{"list":[{"ownershipId":"o-1","userId":7}]}"#)));
    transport.push(Ok(ApiResponse::new(200, "")));
    transport.push(Ok(ApiResponse::new(
        200,
        r#"{"ownershipId":"o-1","userId":7,"customData":{"seats":5}}"#,
    )));
    let client = client(transport);

    let owned = client.list_ownership(None).unwrap();
    let mut ownership: Ownership = owned.into_iter().next().unwrap();
    client.uninstall_app(&ownership).unwrap();
    ownership.custom_data.insert("seats".into(), json!(5));
    let updated = client.update_ownership(&ownership).unwrap();
    assert_eq!(updated.custom_data.get("seats"), Some(&json!(5)));

    let requests = client.transport().requests();
    assert_eq!(query_of(&requests[0])["sort"], r#"{"date":1}"#);
    assert_eq!(requests[1].url.path(), "/v2/ownership/uninstall/o-1");
    assert_eq!(requests[1].json_body(), Some(r#"{"userId":7}"#));
    assert_eq!(requests[2].url.path(), "/v2/ownership/o-1");
    assert_eq!(
        json_body(&requests[2]),
        json!({"ownershipId": "o-1", "userId": 7, "customData": {"seats": 5}})
    );
}

#[test]
fn upload_file_is_multipart() {
    let client = client(MockTransport::replying(
        200,
        r#"{"fileId":"f-1","name":"icon.png","fileUrl":"https://cdn.example/f-1"}"#,
    ));

    let file = client.upload_file("icon.png", vec![0x89, 0x50]).unwrap();
    assert_eq!(file.file_id.as_deref(), Some("f-1"));

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/files");
    assert_eq!(
        request.body,
        RequestBody::Multipart {
            filename: "icon.png".into(),
            bytes: vec![0x89, 0x50],
        }
    );
}

#[test]
fn upload_url_registers_remote_asset() {
    let client = client(MockTransport::replying(200, r#"{"fileId":"f-2"}"#));

    client.upload_url("https://example.com/logo.png").unwrap();

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/files/url");
    assert_eq!(
        request.json_body(),
        Some(r#"{"url":"https://example.com/logo.png"}"#)
    );
}

#[test]
fn stats_total_defaults_to_last_day_views_and_downloads() {
    let client = client(MockTransport::replying(200, r#"{"views":10,"downloads":2}"#));

    let stats = client.get_stats_total(StatsWindow::default(), None, None).unwrap();
    assert_eq!(stats.total("views"), Some(10));

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/stats/total");
    let query = query_of(&request);
    assert_eq!(query["start"], (NOW - 86_400_000).to_string());
    assert_eq!(query["end"], NOW.to_string());
    assert_eq!(query["fields"], "views,downloads");
    assert_eq!(query["query"], "{}");
}

#[test]
fn stats_series_returns_raw_json() {
    let raw = r#"[[1699920000000,3],[1700006400000,5]]"#;
    let client = client(MockTransport::replying(200, raw));

    let series = client
        .get_stats_series(StatsWindow::new(1, 2), Some(&json!({"appId": "abc"})), None)
        .unwrap();
    assert_eq!(series, serde_json::from_str::<Value>(raw).unwrap());

    let request = client.transport().only_request();
    assert_eq!(request.url.path(), "/v2/stats/series/day/downloads");
    let query = query_of(&request);
    assert_eq!(query["start"], "1");
    assert_eq!(query["end"], "2");
    assert_eq!(query["query"], r#"{"appId":"abc"}"#);
}

#[test]
fn client_can_borrow_its_transport() {
    let mock = MockTransport::replying(200, r#"{"developerId":"d-1"}"#);
    {
        let config = Config::new("mkt-1", "s3cret");
        let borrowed = Client::with_transport(config, &mock).unwrap();
        borrowed.get_developer("d-1").unwrap();
    }
    assert_eq!(mock.only_request().url.path(), "/v2/developers/d-1");
}
