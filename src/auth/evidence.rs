use crate::auth_error::{arg_err, AuthResult};
use secstr::SecUtf8;
use std::hash::{Hash, Hasher};

/// The proof-of-identity a caller supplies for a principal.
///
/// Password secrets are kept in a [`SecUtf8`]: the buffer is zeroed when the
/// last clone is dropped, `Debug` output is redacted, and equality is
/// evaluated in constant time. The secret is only obtainable through
/// [`Evidence::reveal_password`], which the authenticator construction uses;
/// nothing else in this crate reads it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Evidence {
    /// The principal proves itself with a password (or password-shaped
    /// secret, like an AWS secret access key).
    Password(SecUtf8),
    /// The proof is established outside the conversation, e.g. by a client
    /// certificate, a Kerberos ticket, or ambient AWS credentials.
    External,
}

impl Evidence {
    /// Password evidence from a plain string.
    pub fn password<P: AsRef<str>>(password: P) -> Self {
        Self::Password(SecUtf8::from(password.as_ref()))
    }

    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password(_))
    }

    /// Reveals the secret, if this is password evidence.
    pub fn reveal_password(&self) -> Option<&SecUtf8> {
        match self {
            Self::Password(secret) => Some(secret),
            Self::External => None,
        }
    }

    /// Reveals the secret for code paths that require a pure-ASCII secret
    /// (e.g. an AWS secret access key).
    ///
    /// # Errors
    /// `AuthError::InvalidArgument` if there is no password or the password
    /// contains non-ASCII characters.
    pub fn ascii_password(&self) -> AuthResult<&SecUtf8> {
        let secret = self
            .reveal_password()
            .ok_or_else(|| arg_err!("a password is required"))?;
        if secret.unsecure().is_ascii() {
            Ok(secret)
        } else {
            Err(arg_err!("the password must contain ASCII characters only"))
        }
    }
}

// Hand-written so that the hash is consistent with the value equality that
// SecUtf8 provides.
impl Hash for Evidence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Password(secret) => {
                state.write_u8(0);
                secret.unsecure().hash(state);
            }
            Self::External => state.write_u8(1),
        }
    }
}
