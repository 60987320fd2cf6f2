use crate::common;

#[tokio::test]
async fn mobile_success_short_circuits_the_chain() {
    let server = common::setup_server();
    let mobile = common::mock_mobile_user(&server, "kevinzingg");
    let web = common::mock_web(&server, "kevinzingg", 200, "{}");
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, "{}");
    let html = common::mock_html(&server, "kevinzingg", 200, "<html></html>");

    let client = common::client_for(&server);
    let record = client.fetch_profile("kevinzingg").await.unwrap();

    mobile.assert();
    assert_eq!(web.hits(), 0);
    assert_eq!(legacy.hits(), 0);
    assert_eq!(html.hits(), 0);

    assert_eq!(record.username, "kevinzingg");
    assert_eq!(record.full_name.as_deref(), Some("Kevin Zingg"));
    assert_eq!(record.biography.as_deref(), Some("Cyclist. Coffee."));
    assert_eq!(record.followers, 5321);
    assert_eq!(
        record.profile_picture_url.as_deref(),
        Some("https://cdn.example.com/kevin_hd.jpg")
    );
}

#[tokio::test]
async fn handle_is_normalized_before_the_first_request() {
    let server = common::setup_server();
    let mobile = common::mock_mobile_user(&server, "kevinzingg");

    let client = common::client_for(&server);
    let record = client.fetch_profile("  @KevinZingg ").await.unwrap();

    mobile.assert();
    assert_eq!(record.username, "kevinzingg");
}
