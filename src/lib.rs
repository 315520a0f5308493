//! Credential modelling and authenticator selection for a MongoDB-style
//! driver.
//!
//! The crate turns a caller's raw authentication components (mechanism name,
//! source, database name, username, evidence) into an immutable, validated
//! [`Credential`], and later translates that credential into the
//! [`Authenticator`] a connection should run. The SASL conversations
//! themselves, TLS handling and connection management are the connection
//! layer's business, not this crate's.
//!
//! ```rust
//! use mongo_auth::{Authenticator, Credential, Evidence};
//!
//! # fn main() -> mongo_auth::AuthResult<()> {
//! let credential = Credential::from_components(
//!     Some("SCRAM-SHA-256"),
//!     None,
//!     Some("sales"),
//!     Some("alice"),
//!     Some(Evidence::password("secret")),
//! )?;
//! let authenticator = Authenticator::for_credential(&credential, None)?;
//! assert_eq!("SCRAM-SHA-256", authenticator.mechanism_name());
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

mod auth;
mod auth_error;

pub use crate::auth::{
    AuthMechanism, Authenticator, Credential, Evidence, FromPropertyValue, Identity,
    PropertyValue, ServerApi, ServerApiVersion, UsernamePasswordPrincipal,
};
pub use crate::auth_error::{AuthError, AuthResult};

/// The sentinel source of principals that are not scoped to an application
/// database.
pub const EXTERNAL_SOURCE: &str = "$external";

/// The source used for password-based mechanisms when neither a source nor
/// a database name is given.
pub const DEFAULT_SOURCE: &str = "admin";
