use igscout::IgError;

use crate::common;

#[tokio::test]
async fn mobile_404_is_immediately_terminal() {
    let server = common::setup_server();
    let mobile = common::mock_mobile(&server, "ghost", 404, "");
    let web = common::mock_web(&server, "ghost", 200, &common::api_envelope());
    let legacy = common::mock_legacy(&server, "ghost", 200, &common::api_envelope());
    let html = common::mock_html(&server, "ghost", 200, &common::html_with_shared_data());

    let client = common::client_for(&server);
    let err = client.fetch_profile("ghost").await.unwrap_err();

    assert!(matches!(err, IgError::NotFound(_)));
    assert!(err.to_string().contains("'ghost' not found"));
    mobile.assert();
    assert_eq!(web.hits(), 0);
    assert_eq!(legacy.hits(), 0);
    assert_eq!(html.hits(), 0);
}

#[tokio::test]
async fn web_429_is_immediately_terminal() {
    let server = common::setup_server();
    let mobile = common::mock_mobile(&server, "kevinzingg", 200, "");
    let web = common::mock_web(&server, "kevinzingg", 429, "");
    let legacy = common::mock_legacy(&server, "kevinzingg", 200, &common::api_envelope());
    let html = common::mock_html(&server, "kevinzingg", 200, "<html></html>");

    let client = common::client_for(&server);
    let err = client.fetch_profile("kevinzingg").await.unwrap_err();

    assert!(matches!(err, IgError::RateLimited(_)));
    mobile.assert();
    web.assert();
    assert_eq!(legacy.hits(), 0);
    assert_eq!(html.hits(), 0);
}

#[tokio::test]
async fn legacy_404_is_terminal_before_the_html_fallback() {
    let server = common::setup_server();
    let mobile = common::mock_mobile(&server, "ghost", 200, "");
    let web = common::mock_web(&server, "ghost", 200, "{}");
    let legacy = common::mock_legacy(&server, "ghost", 404, "");
    let html = common::mock_html(&server, "ghost", 200, &common::html_with_shared_data());

    let client = common::client_for(&server);
    let err = client.fetch_profile("ghost").await.unwrap_err();

    assert!(matches!(err, IgError::NotFound(_)));
    legacy.assert();
    assert_eq!(html.hits(), 0);
}

#[tokio::test]
async fn html_429_is_terminal() {
    let server = common::setup_server();
    common::mock_mobile(&server, "kevinzingg", 200, "");
    common::mock_web(&server, "kevinzingg", 200, "{}");
    common::mock_legacy(&server, "kevinzingg", 200, "{}");
    common::mock_html(&server, "kevinzingg", 429, "");

    let client = common::client_for(&server);
    let err = client.fetch_profile("kevinzingg").await.unwrap_err();

    assert!(matches!(err, IgError::RateLimited(_)));
}
