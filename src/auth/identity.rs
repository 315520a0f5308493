use crate::EXTERNAL_SOURCE;

/// The principal a credential authenticates, together with its namespace
/// scope.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Identity {
    /// A principal scoped to a named database (its "source").
    Internal {
        /// The database the principal is defined in.
        source: String,
        username: String,
    },
    /// A principal that lives in `$external`, i.e. is not scoped to an
    /// application database. The username is optional because MONGODB-X509
    /// can derive it from the client certificate.
    External { username: Option<String> },
    /// No principal name at all; used only by MONGODB-AWS when the access
    /// key is taken from the environment.
    ExternalAnonymous,
}

impl Identity {
    pub(crate) fn internal<S: Into<String>, U: Into<String>>(source: S, username: U) -> Self {
        Self::Internal {
            source: source.into(),
            username: username.into(),
        }
    }

    pub(crate) fn external<U: Into<String>>(username: U) -> Self {
        Self::External {
            username: Some(username.into()),
        }
    }

    /// The source the principal is scoped to; `$external` for the external
    /// variants.
    pub fn source(&self) -> &str {
        match self {
            Self::Internal { source, .. } => source,
            Self::External { .. } | Self::ExternalAnonymous => EXTERNAL_SOURCE,
        }
    }

    /// The principal name, if there is one.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Internal { username, .. } => Some(username),
            Self::External { username } => username.as_deref(),
            Self::ExternalAnonymous => None,
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}.{}",
            self.source(),
            self.username().unwrap_or("<anonymous>")
        )
    }
}
