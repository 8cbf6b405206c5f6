use crate::error::AuthError;
use reviewer_kernel::domain::config::AuthConfig;

/// Authentication service state.
#[reviewer_derive::reviewer_service(token = AuthService)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    /// Validates the route settings and creates the service.
    ///
    /// # Errors
    /// [`AuthError::InvalidConfiguration`] if a route is not absolute.
    pub fn init(config: &AuthConfig) -> Result<Self, AuthError> {
        let routes = [("login_route", &config.login_route), ("home_route", &config.home_route)];
        for (field, route) in routes {
            if !route.starts_with('/') {
                return Err(AuthError::InvalidConfiguration {
                    message: format!("route must start with '/', got {route:?}").into(),
                    context: Some(field.into()),
                });
            }
        }
        Ok(Self::new(AuthServiceInner { config: config.clone() }))
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn login_route(&self) -> &str {
        &self.config.login_route
    }

    #[must_use]
    pub fn home_route(&self) -> &str {
        &self.config.home_route
    }
}
