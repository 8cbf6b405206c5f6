use reviewer_kernel::domain::config::NotificationConfig;
use reviewer_kernel::domain::registry::ComponentToken;
use reviewer_notification::{NotificationError, NotificationService, init};
use std::time::Duration;

#[test]
fn init_creates_service() {
    let service = init(&NotificationConfig::default()).expect("init should succeed");
    assert_eq!(service.token, ComponentToken::NotificationService);

    let handle = service.state.as_any().downcast_ref::<NotificationService>().expect("handle");
    assert_eq!(handle.duration(), Duration::from_secs(3));
}

#[test]
fn zero_duration_is_rejected() {
    let err = init(&NotificationConfig { duration_ms: 0 }).expect_err("zero duration");
    assert!(matches!(err, NotificationError::InvalidConfiguration { .. }));
}
