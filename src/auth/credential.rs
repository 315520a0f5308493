use super::{AuthMechanism, Evidence, FromPropertyValue, Identity, PropertyValue};
use crate::auth_error::AuthResult;
use std::collections::BTreeMap;

/// An immutable aggregate of everything needed to authenticate a principal:
/// mechanism, identity, evidence, and mechanism-specific properties.
///
/// A `Credential` is created exclusively through
/// [`Credential::from_components`], which normalizes the mechanism name and
/// enforces the per-mechanism compatibility rules, or through
/// [`Credential::with_mechanism_property`], which produces a modified copy.
/// Once built, a credential is never mutated; all operations are pure and
/// safe to call concurrently.
///
/// Equality is value equality over all fields; the property map is compared
/// as a set of key/value pairs, independent of insertion order. The hash is
/// consistent with equality. `Debug` and `Display` never reveal the
/// password.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Credential {
    pub(crate) mechanism: Option<AuthMechanism>,
    pub(crate) identity: Identity,
    pub(crate) evidence: Evidence,
    pub(crate) mechanism_properties: BTreeMap<String, PropertyValue>,
}

impl Credential {
    /// The mechanism, or `None` if the credential is mechanism-agnostic and
    /// the driver's default mechanism applies at dispatch time.
    pub fn mechanism(&self) -> Option<AuthMechanism> {
        self.mechanism
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    /// The source the identity is scoped to; `$external` for external
    /// identities.
    pub fn source(&self) -> &str {
        self.identity.source()
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.username()
    }

    /// The raw mechanism-property value stored under `key`, if any.
    pub fn mechanism_property(&self, key: &str) -> Option<&PropertyValue> {
        self.mechanism_properties.get(key)
    }

    /// The property value under `key`, converted to the requested type, or
    /// `default` if the key is absent.
    ///
    /// # Errors
    /// `AuthError::InvalidArgument` if the stored value has a different
    /// type.
    pub fn get_mechanism_property<T: FromPropertyValue>(
        &self,
        key: &str,
        default: T,
    ) -> AuthResult<T> {
        match self.mechanism_properties.get(key) {
            None => Ok(default),
            Some(value) => T::from_property_value(value),
        }
    }

    /// Returns a copy of this credential with the given property set,
    /// overwriting an existing value under the same key.
    ///
    /// The copy owns its own property map; neither credential observes
    /// later changes to the other.
    #[must_use]
    pub fn with_mechanism_property<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
    {
        let mut copy = self.clone();
        copy.mechanism_properties.insert(key.into(), value.into());
        copy
    }

    /// Iterates over the mechanism properties in key order.
    pub fn mechanism_properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.mechanism_properties
            .iter()
            .map(|(k, v)| (k.as_str(), v))
    }

    /// The properties in their string form, as forwarded to GSSAPI and
    /// MONGODB-AWS authenticators.
    pub(crate) fn stringified_properties(&self) -> Vec<(String, String)> {
        self.mechanism_properties
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

// Renders mechanism and identity, but neither the password nor the
// property values (tokens can be sensitive too).
impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.mechanism {
            Some(mechanism) => write!(f, "{mechanism}:{}", self.identity),
            None => write!(f, "DEFAULT:{}", self.identity),
        }
    }
}
