use std::collections::HashMap;

use igscout::ProxyPool;

use crate::common;

#[tokio::test]
async fn rotation_visits_every_endpoint_fairly() {
    let pool = ProxyPool::new(
        common::static_listing(&[]),
        ["a.example", "b.example", "c.example"],
    );

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..9 {
        let endpoint = pool.next_endpoint().await.expect("endpoint");
        *counts.entry(endpoint.host().to_string()).or_insert(0) += 1;
    }

    assert_eq!(counts.get("a.example"), Some(&3));
    assert_eq!(counts.get("b.example"), Some(&3));
    assert_eq!(counts.get("c.example"), Some(&3));
}

#[tokio::test]
async fn repeated_calls_cycle_before_repeating() {
    let pool = ProxyPool::new(common::static_listing(&[]), ["a.example", "b.example"]);

    let first = pool.next_endpoint().await.expect("endpoint");
    let second = pool.next_endpoint().await.expect("endpoint");
    let third = pool.next_endpoint().await.expect("endpoint");

    assert_ne!(first.host(), second.host());
    assert_eq!(first.host(), third.host());
}
