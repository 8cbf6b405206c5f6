use reviewer_derive::reviewer_error;
use std::borrow::Cow;

#[reviewer_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk gone")).context("Reading manifest")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading manifest): disk gone");

    let internal: Result<(), DemoError> = Err("boom".into());
    let err = internal.context("wiring").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (wiring): boom");

    let converted: DemoError = std::io::Error::other("plain").into();
    assert_eq!(converted.to_string(), "IO error: plain");
}
