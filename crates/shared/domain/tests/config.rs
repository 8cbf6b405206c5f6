use reviewer_domain::config::{
    AuthConfig, FirebaseConfig, LocalserverConfig, LoggingConfig, NotificationConfig,
    ReviewerConfig,
};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn config_defaults_are_sane() {
    let auth = AuthConfig::default();
    assert_eq!(auth.login_route, "/login");
    assert_eq!(auth.home_route, "/");

    let firebase = FirebaseConfig::default();
    assert!(!firebase.project_id.is_empty());
    assert!(firebase.database_url.starts_with("https://"));

    let localserver = LocalserverConfig::default();
    assert_eq!(localserver.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(localserver.port, 7000);

    assert_eq!(NotificationConfig::default().duration_ms, 3000);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn reviewer_config_deserializes_partial_sections() {
    let raw = json!({
        "localserver": { "port": 7100 },
        "firebase": { "project_id": "review-staging" },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: ReviewerConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.localserver.port, 7100);
    assert_eq!(cfg.localserver.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.firebase.project_id, "review-staging");
    assert_eq!(cfg.auth, AuthConfig::default());
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn clones_share_until_mutated() {
    let base = ReviewerConfig::default();
    let mut edited = base.clone();
    edited.notification.duration_ms = 500;

    assert_eq!(base.notification.duration_ms, 3000);
    assert_eq!(edited.notification.duration_ms, 500);
}
