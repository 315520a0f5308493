use thiserror::Error;

/// A list specifying the failure categories of credential construction and
/// authenticator selection.
///
/// All of these are deterministic configuration errors: they are raised
/// synchronously at the point of construction or dispatch and are never
/// worth retrying.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuthError {
    /// A required component is missing or ill-formed, e.g. a password is
    /// mandatory but absent, or a code path requires a pure-ASCII secret.
    #[error("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// A mechanism-specific rule is violated: wrong evidence shape, missing
    /// username, or a source other than `$external` supplied to an
    /// external-only mechanism.
    #[error("Invalid credential configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The normalized mechanism name matches none of the known set.
    #[error("Unsupported authentication mechanism: {}", _0)]
    UnsupportedMechanism(String),

    /// A structurally valid credential matches no dispatch rule.
    ///
    /// This is defensive; it is unreachable as long as the resolution and
    /// dispatch tables stay in sync.
    #[error("No authenticator available: {}", _0)]
    UnsupportedAuthenticator(String),
}

/// Abbreviation of `Result<T, AuthError>`.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

macro_rules! arg_err {
    ($($arg:tt)*) => {
        $crate::auth_error::AuthError::InvalidArgument(format!($($arg)*))
    };
}

macro_rules! config_err {
    ($($arg:tt)*) => {
        $crate::auth_error::AuthError::InvalidConfiguration(format!($($arg)*))
    };
}

macro_rules! unsupported_authenticator_err {
    ($($arg:tt)*) => {
        $crate::auth_error::AuthError::UnsupportedAuthenticator(format!($($arg)*))
    };
}

pub(crate) use {arg_err, config_err, unsupported_authenticator_err};
