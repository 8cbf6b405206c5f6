//! Encoding feature slice.
use reviewer_kernel::domain::registry::InitializedService;

/// Encoding service inner state.
#[reviewer_derive::reviewer_service(token = EncodingService)]
pub struct EncodingService {}

/// Initialize the encoding service.
#[must_use]
pub fn init() -> InitializedService {
    tracing::info!("Encoding service initialized");

    let inner = EncodingServiceInner {};

    InitializedService::new(EncodingService::new(inner))
}
