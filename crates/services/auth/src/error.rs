use std::borrow::Cow;

/// A specialized [`AuthError`] enum of this crate.
#[reviewer_derive::reviewer_error]
pub enum AuthError {
    /// Route settings the guard cannot navigate to.
    #[error("Invalid auth configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
