use crate::common;

async fn record_for_user(user: serde_json::Value) -> igscout::ProfileRecord {
    let server = common::setup_server();
    let body = serde_json::json!({ "data": { "user": user } }).to_string();
    common::mock_mobile(&server, "kevinzingg", 200, &body);

    let client = common::client_for(&server);
    client.fetch_profile("kevinzingg").await.unwrap()
}

#[tokio::test]
async fn null_follower_edge_defaults_to_zero() {
    let record = record_for_user(serde_json::json!({
        "full_name": "Kevin Zingg",
        "edge_followed_by": null,
        "profile_pic_url": "https://cdn.example.com/kevin_std.jpg"
    }))
    .await;

    assert_eq!(record.followers, 0);
}

#[tokio::test]
async fn follower_count_is_carried_through() {
    let record = record_for_user(serde_json::json!({
        "edge_followed_by": { "count": 1234 }
    }))
    .await;

    assert_eq!(record.followers, 1234);
}

#[tokio::test]
async fn non_numeric_follower_count_defaults_to_zero() {
    let record = record_for_user(serde_json::json!({
        "edge_followed_by": { "count": "many" },
        "profile_pic_url": "https://cdn.example.com/kevin_std.jpg"
    }))
    .await;

    assert_eq!(record.followers, 0);
}

#[tokio::test]
async fn blank_biography_becomes_none() {
    let record = record_for_user(serde_json::json!({
        "biography": "",
        "edge_followed_by": { "count": 7 }
    }))
    .await;

    assert_eq!(record.biography, None);
}

#[tokio::test]
async fn high_resolution_picture_is_preferred() {
    let record = record_for_user(serde_json::json!({
        "edge_followed_by": { "count": 7 },
        "profile_pic_url": "https://cdn.example.com/std.jpg",
        "profile_pic_url_hd": "https://cdn.example.com/hd.jpg"
    }))
    .await;

    assert_eq!(record.profile_picture_url.as_deref(), Some("https://cdn.example.com/hd.jpg"));
}

#[tokio::test]
async fn standard_picture_is_used_when_no_high_resolution_variant() {
    let record = record_for_user(serde_json::json!({
        "edge_followed_by": { "count": 7 },
        "profile_pic_url": "https://cdn.example.com/std.jpg"
    }))
    .await;

    assert_eq!(record.profile_picture_url.as_deref(), Some("https://cdn.example.com/std.jpg"));
}
