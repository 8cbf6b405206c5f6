use crate::service::AuthService;

/// Route gate, wired to the [`AuthService`] it consults.
#[reviewer_derive::reviewer_service(token = AuthGuard)]
pub struct AuthGuard {
    auth: AuthService,
}

impl AuthGuard {
    /// Builds the guard on top of an existing service handle; both share one instance.
    #[must_use]
    pub fn init(auth: &AuthService) -> Self {
        Self::new(AuthGuardInner { auth: auth.clone() })
    }

    #[must_use]
    pub fn service(&self) -> &AuthService {
        &self.auth
    }

    /// Where unauthenticated navigation is sent.
    #[must_use]
    pub fn redirect_route(&self) -> &str {
        self.auth.login_route()
    }
}
