use std::borrow::Cow;

/// Notification slice error type.
#[reviewer_derive::reviewer_error]
pub enum NotificationError {
    #[error("Invalid notification configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
