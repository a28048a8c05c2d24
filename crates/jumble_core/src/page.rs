//! Page identity tokens

use std::borrow::Cow;
use std::fmt;

/// Opaque token naming a logical page.
///
/// Layouts compare the page they own against the page the router reports as
/// current; nothing else is derived from the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageId(Cow<'static, str>);

impl PageId {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PageId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
