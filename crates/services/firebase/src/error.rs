use std::borrow::Cow;

/// Firebase slice error type.
#[reviewer_derive::reviewer_error]
pub enum FirebaseError {
    #[error("Invalid Firebase configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
