use std::borrow::Cow;

#[reviewer_derive::reviewer_error]
pub enum LocalserverError {
    #[error("Invalid local server configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
