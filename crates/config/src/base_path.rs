use std::fmt;

/// Path prefix under which the site is deployed, e.g. `/app` when the site
/// is served from a sub-directory rather than the domain root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self(path.into())
    }

    /// Prefix applied to root-relative urls.  The root path (or an unset
    /// one) collapses to the empty string so joining never doubles the
    /// leading slash.
    pub fn prefix(&self) -> &str {
        if self.0 == "/" { "" } else { self.0.as_str() }
    }

    pub fn join(&self, rel: &str) -> String {
        let mut url = self.prefix().to_owned();
        url.push_str(rel);
        url
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".to_owned())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BasePath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}
