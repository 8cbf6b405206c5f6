use reviewer_kernel::container::{ContainerError, ServiceContainer};
use reviewer_kernel::domain::registry::{
    ComponentToken, InitializedService, Service, ServiceRegistry,
};

#[reviewer_derive::reviewer_service(token = DifferenceService)]
pub struct Difference {}

#[reviewer_derive::reviewer_service(token = EncodingService)]
pub struct Encoding {
    pub charset: &'static str,
}

#[reviewer_derive::reviewer_service(token = EncodingService)]
pub struct ShadowEncoding {}

fn difference() -> InitializedService {
    InitializedService::new(Difference::new(DifferenceInner {}))
}

fn encoding() -> InitializedService {
    InitializedService::new(Encoding::new(EncodingInner { charset: "utf-8" }))
}

#[test]
fn lookups_by_type_and_token() -> Result<(), ContainerError> {
    let container =
        ServiceContainer::builder().register(encoding())?.register(difference())?.build();

    assert_eq!(container.len(), 2);
    assert_eq!(container.try_get::<Encoding>()?.charset, "utf-8");
    assert!(container.get::<Difference>().is_some());

    let resolved = container.resolve(ComponentToken::EncodingService).expect("resolves");
    assert_eq!(resolved.token(), ComponentToken::EncodingService);
    assert!(resolved.as_any().downcast_ref::<Encoding>().is_some());
    assert!(container.resolve(ComponentToken::AuthGuard).is_none());
    Ok(())
}

#[test]
fn keeps_registration_order() -> Result<(), ContainerError> {
    let container = ServiceContainer::builder().register_all([encoding(), difference()])?.build();
    let tokens: Vec<_> = container.tokens().collect();
    assert_eq!(tokens, [ComponentToken::EncodingService, ComponentToken::DifferenceService]);
    Ok(())
}

#[test]
fn rejects_duplicate_tokens() {
    let shadow = InitializedService::new(ShadowEncoding::new(ShadowEncodingInner {}));
    let err = ServiceContainer::builder()
        .register(encoding())
        .and_then(|builder| builder.register(shadow))
        .expect_err("second EncodingService must be rejected");

    assert!(matches!(
        err,
        ContainerError::DuplicateService { token: ComponentToken::EncodingService, .. }
    ));
}

#[test]
fn try_get_reports_missing_type() {
    let container = ServiceContainer::builder().build();
    let err = container.try_get::<Difference>().expect_err("nothing registered");
    assert!(matches!(err, ContainerError::MissingService { .. }));
    assert!(err.to_string().contains("Difference"));
}

#[test]
fn verify_against_manifest() -> Result<(), ContainerError> {
    let container = ServiceContainer::builder().register_all([difference(), encoding()])?.build();

    container.verify(&[ComponentToken::EncodingService, ComponentToken::DifferenceService])?;

    let missing = container.verify(ServiceRegistry::list()).expect_err("partial container");
    assert!(matches!(missing, ContainerError::MissingService { .. }));
    assert!(missing.to_string().contains("AuthGuard"));

    let extra = container.verify(&[ComponentToken::DifferenceService]).expect_err("extra service");
    assert!(matches!(
        extra,
        ContainerError::UnexpectedService { token: ComponentToken::EncodingService, .. }
    ));
    Ok(())
}
