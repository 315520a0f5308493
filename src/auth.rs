// Credential modelling: the components a caller supplies, the validated
// aggregate they resolve into, and the authenticator selection that the
// connection layer consumes.

mod authenticator;
mod credential;
mod evidence;
mod identity;
mod mechanism;
mod property_value;
mod resolver;
mod server_api;

pub use {
    authenticator::{Authenticator, UsernamePasswordPrincipal},
    credential::Credential,
    evidence::Evidence,
    identity::Identity,
    mechanism::AuthMechanism,
    property_value::{FromPropertyValue, PropertyValue},
    server_api::{ServerApi, ServerApiVersion},
};
