use httpmock::Method::GET;
use url::Url;

use igscout::{IgClient, IgError, ProxyAuth};

use crate::common;

/// No proxies configured and the listing source has nothing: the fetch goes
/// straight to a direct attempt and succeeds on the first strategy.
#[tokio::test]
async fn direct_attempt_when_pool_and_listing_are_empty() {
    let server = common::setup_server();
    let listing = server.mock(|when, then| {
        when.method(GET).path("/proxies");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let mobile = common::mock_mobile_user(&server, "kevinzingg");

    // Use the real HTTP listing source here rather than the injected stub.
    let client = IgClient::builder()
        .base_mobile_api(Url::parse(&format!("{}/mobile/api/", server.base_url())).unwrap())
        .base_web_api(Url::parse(&format!("{}/web/api/", server.base_url())).unwrap())
        .base_profile(Url::parse(&format!("{}/ig/", server.base_url())).unwrap())
        .listing_url(Url::parse(&format!("{}/proxies", server.base_url())).unwrap())
        .scrape_config(common::test_config())
        .build()
        .unwrap();

    let record = client.fetch_profile("kevinzingg").await.unwrap();

    listing.assert();
    mobile.assert();
    assert_eq!(record.username, "kevinzingg");
    assert_eq!(record.followers, 5321);
}

/// One configured endpoint that fails its reachability probe: it gets marked
/// bad, the pool comes up empty, and the fetch falls through to a direct
/// attempt.
#[tokio::test]
async fn unreachable_proxy_is_marked_bad_and_fetch_goes_direct() {
    let server = common::setup_server();
    let mobile = common::mock_mobile_user(&server, "kevinzingg");

    // A port that was just released and is no longer listening.
    let closed_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    };

    let client = common::client_builder_for(&server)
        .proxy_hosts(["127.0.0.1"])
        .proxy_auth(ProxyAuth {
            port: closed_port,
            ..ProxyAuth::new("proxyuser", "proxypass")
        })
        .build()
        .unwrap();

    let record = client.fetch_profile("kevinzingg").await.unwrap();

    mobile.assert();
    assert_eq!(record.followers, 5321);
    // The endpoint sits in cooldown: the pool has nothing else to offer.
    assert!(client.proxy_pool().next_endpoint().await.is_none());
}

/// Every strategy is inconclusive and the HTML page has neither a follower
/// count nor a picture: the fetch reports NotFound with the extraction
/// message.
#[tokio::test]
async fn nothing_extractable_reports_not_found() {
    let server = common::setup_server();
    common::mock_mobile(&server, "kevinzingg", 200, "");
    common::mock_web(&server, "kevinzingg", 200, "{}");
    common::mock_legacy(&server, "kevinzingg", 200, "");
    common::mock_html(
        &server,
        "kevinzingg",
        200,
        "<html><body>Log in to continue</body></html>",
    );

    let client = common::client_for(&server);
    let err = client.fetch_profile("kevinzingg").await.unwrap_err();

    assert!(matches!(err, IgError::NotFound(_)));
    assert!(err.to_string().contains("Unable to extract data"));
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    let err = client.fetch_profile("  @ ").await.unwrap_err();
    assert!(matches!(err, IgError::Data(_)));
}
