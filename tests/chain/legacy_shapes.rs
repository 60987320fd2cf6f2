use crate::common;

fn inconclusive_earlier_strategies(server: &httpmock::MockServer, handle: &str) {
    common::mock_mobile(server, handle, 200, "");
    common::mock_web(server, handle, 200, "{}");
}

#[tokio::test]
async fn legacy_user_under_graphql_wrapper() {
    let server = common::setup_server();
    inconclusive_earlier_strategies(&server, "kevinzingg");
    let body = serde_json::json!({ "graphql": { "user": common::user_json() } }).to_string();
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, &body);

    let client = common::client_for(&server);
    let record = client.fetch_profile("kevinzingg").await.unwrap();

    legacy.assert();
    assert_eq!(record.followers, 5321);
}

#[tokio::test]
async fn legacy_user_under_data_wrapper() {
    let server = common::setup_server();
    inconclusive_earlier_strategies(&server, "kevinzingg");
    let body = serde_json::json!({ "data": { "user": common::user_json() } }).to_string();
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, &body);

    let client = common::client_for(&server);
    let record = client.fetch_profile("kevinzingg").await.unwrap();

    legacy.assert();
    assert_eq!(record.full_name.as_deref(), Some("Kevin Zingg"));
}

#[tokio::test]
async fn legacy_user_in_items_list() {
    let server = common::setup_server();
    inconclusive_earlier_strategies(&server, "kevinzingg");
    let body = serde_json::json!({ "items": [ { "user": common::user_json() } ] }).to_string();
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, &body);

    let client = common::client_for(&server);
    let record = client.fetch_profile("kevinzingg").await.unwrap();

    legacy.assert();
    assert_eq!(record.followers, 5321);
}

#[tokio::test]
async fn legacy_empty_user_object_advances_to_html() {
    let server = common::setup_server();
    inconclusive_earlier_strategies(&server, "kevinzingg");
    let body = serde_json::json!({ "graphql": { "user": {} } }).to_string();
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, &body);
    let html = common::mock_html(&server, "kevinzingg", 200, &common::html_with_shared_data());

    let client = common::client_for(&server);
    let record = client.fetch_profile("kevinzingg").await.unwrap();

    legacy.assert();
    html.assert();
    // Served from the embedded blob on the profile page.
    assert_eq!(record.followers, 5321);
    assert_eq!(record.biography.as_deref(), Some("Cyclist. Coffee."));
}
