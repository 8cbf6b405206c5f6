//! Highlight feature slice.

use reviewer_kernel::domain::registry::InitializedService;

#[reviewer_derive::reviewer_service(token = HighlightService)]
pub struct HighlightService {}

/// Initialize the highlight service.
#[must_use]
pub fn init() -> InitializedService {
    tracing::info!("Highlight service initialized");

    let service = HighlightService::new(HighlightServiceInner {});
    InitializedService::new(service)
}
