use reviewer_highlight::{HighlightService, init};
use reviewer_kernel::domain::registry::{ComponentToken, Service};

#[test]
fn init_creates_service() {
    let service = init();
    assert_eq!(service.id, std::any::TypeId::of::<HighlightService>());
    assert_eq!(service.token, ComponentToken::HighlightService);
    assert_eq!(service.state.token(), HighlightService::TOKEN);
}
