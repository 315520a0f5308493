use crate::auth_error::AuthError;

/// The authentication mechanisms a credential can name explicitly.
///
/// A credential whose mechanism is left unspecified (`None` on
/// [`Credential`](crate::Credential)) stays mechanism-agnostic until
/// dispatch time, where the driver's negotiated default takes over.
///
/// Mechanism names are matched case-insensitively on input and always
/// rendered in their canonical upper-case form.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AuthMechanism {
    /// The legacy challenge-response mechanism (deprecated).
    #[serde(rename = "MONGODB-CR")]
    MongoDbCr,
    /// SCRAM with SHA-1.
    #[serde(rename = "SCRAM-SHA-1")]
    ScramSha1,
    /// SCRAM with SHA-256.
    #[serde(rename = "SCRAM-SHA-256")]
    ScramSha256,
    /// Authentication with AWS IAM credentials.
    #[serde(rename = "MONGODB-AWS")]
    MongoDbAws,
    /// Authentication with a client X.509 certificate.
    #[serde(rename = "MONGODB-X509")]
    MongoDbX509,
    /// Kerberos.
    #[serde(rename = "GSSAPI")]
    Gssapi,
    /// SASL PLAIN, typically used for LDAP.
    #[serde(rename = "PLAIN")]
    Plain,
}

impl AuthMechanism {
    /// The canonical upper-case mechanism name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MongoDbCr => "MONGODB-CR",
            Self::ScramSha1 => "SCRAM-SHA-1",
            Self::ScramSha256 => "SCRAM-SHA-256",
            Self::MongoDbAws => "MONGODB-AWS",
            Self::MongoDbX509 => "MONGODB-X509",
            Self::Gssapi => "GSSAPI",
            Self::Plain => "PLAIN",
        }
    }
}

impl std::str::FromStr for AuthMechanism {
    type Err = AuthError;

    // Input is expected to be already trimmed and upper-cased;
    // `resolver::normalize_mechanism` takes care of that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONGODB-CR" => Ok(Self::MongoDbCr),
            "SCRAM-SHA-1" => Ok(Self::ScramSha1),
            "SCRAM-SHA-256" => Ok(Self::ScramSha256),
            "MONGODB-AWS" => Ok(Self::MongoDbAws),
            "MONGODB-X509" => Ok(Self::MongoDbX509),
            "GSSAPI" => Ok(Self::Gssapi),
            "PLAIN" => Ok(Self::Plain),
            _ => Err(AuthError::UnsupportedMechanism(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
