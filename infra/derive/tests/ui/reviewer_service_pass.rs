use reviewer_kernel::domain::registry::{ComponentToken, InitializedService, Service};

#[reviewer_derive::reviewer_service(token = HighlightService)]
pub struct Highlight {
    pub theme: String,
}

fn main() {
    let handle = Highlight::new(HighlightInner { theme: "github".to_owned() });
    let copy = handle.clone();

    assert_eq!(Highlight::TOKEN, ComponentToken::HighlightService);
    assert_eq!(handle.token(), ComponentToken::HighlightService);
    assert_eq!(copy.theme, "github");
    assert!(handle.same_instance(&copy));

    let initialized = InitializedService::new(handle);
    assert_eq!(initialized.token, ComponentToken::HighlightService);
    assert!(initialized.state.as_any().downcast_ref::<Highlight>().is_some());
}
