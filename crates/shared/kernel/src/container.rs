//! Resolved service set produced by the composition root.

use crate::domain::registry::{ComponentToken, InitializedService, Service};
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use tracing::debug;

#[reviewer_derive::reviewer_error]
pub enum ContainerError {
    #[error("Service registered twice{}: {token}", format_context(.context))]
    DuplicateService { token: ComponentToken, context: Option<Cow<'static, str>> },
    #[error("Service not registered{}: {message}", format_context(.context))]
    MissingService { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Service outside the manifest{}: {token}", format_context(.context))]
    UnexpectedService { token: ComponentToken, context: Option<Cow<'static, str>> },
}

/// Immutable, ordered set of initialized services.
///
/// Lookups go by concrete type ([`ServiceContainer::get`]) or by token
/// ([`ServiceContainer::resolve`]); iteration follows registration order.
#[derive(Debug)]
pub struct ServiceContainer {
    services: Vec<InitializedService>,
    by_type: FxHashMap<TypeId, usize>,
    by_token: FxHashMap<ComponentToken, usize>,
}

impl ServiceContainer {
    #[must_use]
    pub fn builder() -> ServiceContainerBuilder {
        ServiceContainerBuilder::default()
    }

    #[must_use]
    pub fn get<T: Service>(&self) -> Option<&T> {
        self.by_type
            .get(&TypeId::of::<T>())
            .and_then(|index| self.services[*index].state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the service if it is registered.
    ///
    /// # Errors
    /// Returns [`ContainerError::MissingService`] if no service of type `T` is registered.
    pub fn try_get<T: Service>(&self) -> Result<&T, ContainerError> {
        self.get::<T>().ok_or_else(|| ContainerError::MissingService {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    #[must_use]
    pub fn resolve(&self, token: ComponentToken) -> Option<&dyn Service> {
        self.by_token.get(&token).map(|index| self.services[*index].state.as_ref())
    }

    /// Registered tokens in registration order.
    pub fn tokens(&self) -> impl ExactSizeIterator<Item = ComponentToken> + '_ {
        self.services.iter().map(|service| service.token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Checks that every manifest token resolves and nothing else is registered.
    ///
    /// # Errors
    /// [`ContainerError::MissingService`] for the first unresolved manifest entry,
    /// [`ContainerError::UnexpectedService`] for the first registered token not in `manifest`.
    pub fn verify(&self, manifest: &[ComponentToken]) -> Result<(), ContainerError> {
        if let Some(missing) = manifest.iter().find(|token| !self.by_token.contains_key(token)) {
            return Err(ContainerError::MissingService {
                message: missing.as_str().into(),
                context: Some("manifest entry does not resolve".into()),
            });
        }
        if let Some(extra) = self.tokens().find(|token| !manifest.contains(token)) {
            return Err(ContainerError::UnexpectedService { token: extra, context: None });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ServiceContainerBuilder {
    services: Vec<InitializedService>,
}

impl ServiceContainerBuilder {
    /// Adds a service.
    ///
    /// # Errors
    /// Returns [`ContainerError::DuplicateService`] if its token, or its concrete type, is already
    /// registered.
    pub fn register(mut self, service: InitializedService) -> Result<Self, ContainerError> {
        if self.services.iter().any(|s| s.token == service.token || s.id == service.id) {
            return Err(ContainerError::DuplicateService { token: service.token, context: None });
        }
        debug!(token = %service.token, "Service registered");
        self.services.push(service);
        Ok(self)
    }

    /// Registers multiple services at once.
    ///
    /// # Errors
    /// Stops at the first duplicate, see [`ServiceContainerBuilder::register`].
    pub fn register_all<I>(self, services: I) -> Result<Self, ContainerError>
    where
        I: IntoIterator<Item = InitializedService>,
    {
        services.into_iter().try_fold(self, Self::register)
    }

    #[must_use]
    pub fn build(self) -> ServiceContainer {
        let by_type = self.services.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        let by_token = self.services.iter().enumerate().map(|(i, s)| (s.token, i)).collect();
        ServiceContainer { services: self.services, by_type, by_token }
    }
}
