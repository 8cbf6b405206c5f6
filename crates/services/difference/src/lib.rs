//! Difference feature slice.

use reviewer_kernel::domain::registry::InitializedService;

/// Comparison service handle.
#[reviewer_derive::reviewer_service(token = DifferenceService)]
pub struct DifferenceService {}

/// Initialize the difference service.
#[must_use]
pub fn init() -> InitializedService {
    tracing::info!("Difference service initialized");

    InitializedService::new(DifferenceService::new(DifferenceServiceInner {}))
}
