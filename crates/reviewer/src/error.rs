use reviewer_kernel::container::ContainerError;
use std::borrow::Cow;

/// Failures while wiring the service graph. The context names the failing token.
#[reviewer_derive::reviewer_error]
pub enum ComposeError {
    #[error("Auth wiring failed{}: {source}", format_context(.context))]
    Auth { source: reviewer_auth::AuthError, context: Option<Cow<'static, str>> },

    #[error("Firebase wiring failed{}: {source}", format_context(.context))]
    Firebase { source: reviewer_firebase::FirebaseError, context: Option<Cow<'static, str>> },

    #[error("Local server wiring failed{}: {source}", format_context(.context))]
    Localserver {
        source: reviewer_localserver::LocalserverError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Notification wiring failed{}: {source}", format_context(.context))]
    Notification {
        source: reviewer_notification::NotificationError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Service container rejected the graph{}: {source}", format_context(.context))]
    Container { source: ContainerError, context: Option<Cow<'static, str>> },
}
