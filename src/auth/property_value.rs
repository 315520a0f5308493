use crate::auth_error::{arg_err, AuthResult};

/// A mechanism-property value.
///
/// Property keys are mechanism-specific free-form strings (e.g.
/// `SERVICE_NAME` for GSSAPI or `AWS_SESSION_TOKEN` for MONGODB-AWS); this
/// crate imposes no schema on them beyond key uniqueness. Values are
/// forwarded to the authenticator in their string form (`Display`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyValue {
    String(String),
    Int(i32),
    Bigint(i64),
    Boolean(bool),
}

impl PropertyValue {
    pub fn get_string(&self) -> AuthResult<&str> {
        if let Self::String(s) = self {
            Ok(s)
        } else {
            Err(arg_err!("not a String-typed property value: {self}"))
        }
    }

    pub fn get_i32(&self) -> AuthResult<i32> {
        if let Self::Int(i) = self {
            Ok(*i)
        } else {
            Err(arg_err!("not an Int-typed property value: {self}"))
        }
    }

    pub fn get_i64(&self) -> AuthResult<i64> {
        match self {
            Self::Int(i) => Ok(i64::from(*i)),
            Self::Bigint(i) => Ok(*i),
            _ => Err(arg_err!("not an integer-typed property value: {self}")),
        }
    }

    pub fn get_bool(&self) -> AuthResult<bool> {
        if let Self::Boolean(b) = self {
            Ok(*b)
        } else {
            Err(arg_err!("not a Boolean-typed property value: {self}"))
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bigint(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}
impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Bigint(i)
    }
}
impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Typed extraction from a [`PropertyValue`], used by
/// [`Credential::get_mechanism_property`](crate::Credential::get_mechanism_property).
///
/// A present-but-wrong-typed value is a checked failure
/// (`AuthError::InvalidArgument`), never a panic.
pub trait FromPropertyValue: Sized {
    fn from_property_value(value: &PropertyValue) -> AuthResult<Self>;
}

impl FromPropertyValue for String {
    fn from_property_value(value: &PropertyValue) -> AuthResult<Self> {
        value.get_string().map(ToString::to_string)
    }
}
impl FromPropertyValue for i32 {
    fn from_property_value(value: &PropertyValue) -> AuthResult<Self> {
        value.get_i32()
    }
}
impl FromPropertyValue for i64 {
    fn from_property_value(value: &PropertyValue) -> AuthResult<Self> {
        value.get_i64()
    }
}
impl FromPropertyValue for bool {
    fn from_property_value(value: &PropertyValue) -> AuthResult<Self> {
        value.get_bool()
    }
}
