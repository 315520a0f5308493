/// The versioned-API declaration a connection passes to every
/// authenticator it constructs.
///
/// This crate only carries the declaration along; the authenticators attach
/// it to their wire commands.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ServerApi {
    pub version: ServerApiVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_errors: Option<bool>,
}

impl ServerApi {
    pub fn new(version: ServerApiVersion) -> Self {
        Self {
            version,
            strict: None,
            deprecation_errors: None,
        }
    }
}

/// The declarable server API versions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ServerApiVersion {
    #[serde(rename = "1")]
    V1,
}

impl std::fmt::Display for ServerApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::V1 => f.write_str("1"),
        }
    }
}
