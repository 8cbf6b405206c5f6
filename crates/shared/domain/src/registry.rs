//! Service manifest for the reviewer front-end.
//!
//! [`ServiceRegistry::list`] is the single authoritative list of components the composition root
//! must make resolvable. It is a `'static` slice: created at compile time, never mutated.

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::fmt::Debug;
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Name of an injectable unit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ComponentToken {
    /// Route/access gate.
    AuthGuard,
    /// Authentication.
    AuthService,
    /// Comparison/diff.
    DifferenceService,
    /// Remote backend client.
    FirebaseService,
    /// Text/content highlighting.
    HighlightService,
    /// User notifications.
    NotificationService,
    /// Data encoding/decoding.
    EncodingService,
    /// Local server communication.
    LocalserverService,
}

impl ComponentToken {
    /// The token's stable name, e.g. `"AuthGuard"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

static SERVICE_LIST: [ComponentToken; 8] = [
    ComponentToken::AuthGuard,
    ComponentToken::AuthService,
    ComponentToken::DifferenceService,
    ComponentToken::FirebaseService,
    ComponentToken::HighlightService,
    ComponentToken::NotificationService,
    ComponentToken::EncodingService,
    ComponentToken::LocalserverService,
];

/// The static, ordered manifest of services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceRegistry;

impl ServiceRegistry {
    /// Returns the manifest in registration order.
    ///
    /// Every call yields the same `'static` slice.
    #[must_use]
    pub fn list() -> &'static [ComponentToken] {
        &SERVICE_LIST
    }

    #[must_use]
    pub fn len() -> usize {
        SERVICE_LIST.len()
    }

    #[must_use]
    pub fn contains(token: ComponentToken) -> bool {
        SERVICE_LIST.contains(&token)
    }

    /// Index of `token` in the manifest.
    #[must_use]
    pub fn position(token: ComponentToken) -> Option<usize> {
        SERVICE_LIST.iter().position(|t| *t == token)
    }

    pub fn iter() -> impl ExactSizeIterator<Item = ComponentToken> {
        SERVICE_LIST.iter().copied()
    }

    /// Manifest entries as their string names.
    pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
        Self::iter().map(ComponentToken::as_str)
    }
}

/// Tokens that occur more than once in `tokens`, each reported once, in order of first repeat.
#[must_use]
pub fn duplicates(tokens: &[ComponentToken]) -> Vec<ComponentToken> {
    let mut seen = [0_u8; ComponentToken::COUNT];
    let mut repeated = Vec::new();
    for token in tokens {
        let count = &mut seen[*token as usize];
        *count = count.saturating_add(1);
        if *count == 2 {
            repeated.push(*token);
        }
    }
    repeated
}

/// Marker trait for initialized service handles.
pub trait Service: Any + Debug + Send + Sync {
    /// Manifest entry this service satisfies.
    fn token(&self) -> ComponentToken;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A constructed service, type-erased for registration.
#[derive(Debug)]
pub struct InitializedService {
    pub token: ComponentToken,
    pub id: TypeId,
    pub state: Box<dyn Service>,
}

impl InitializedService {
    pub fn new<T: Service>(state: T) -> Self {
        Self { token: state.token(), id: TypeId::of::<T>(), state: Box::new(state) }
    }
}
