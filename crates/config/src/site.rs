#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub title: Option<String>,
    pub base_url: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub logo: Option<String>,
    pub nav: Vec<NavLink>,
}

impl Site {
    /// Field-wise merge with `self` taking precedence.  `nav` is kept
    /// whole; entries are never mixed between the two sides.
    pub fn merge(self, other: &Self) -> Self {
        let Self {
            title,
            base_url,
            description,
            keywords,
            logo,
            nav,
        } = self;
        Self {
            title: title.or_else(|| other.title.clone()),
            base_url: base_url.or_else(|| other.base_url.clone()),
            description: description.or_else(|| other.description.clone()),
            keywords: keywords.or_else(|| other.keywords.clone()),
            logo: logo.or_else(|| other.logo.clone()),
            nav: if nav.is_empty() { other.nav.clone() } else { nav },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct NavLink {
    pub name: String,
    pub url: String,
}

impl NavLink {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Whether the target is relative to the deployment root, as opposed to
    /// an absolute or protocol-relative URL.
    pub fn is_root_relative(&self) -> bool {
        self.url.starts_with('/') && !self.url.starts_with("//")
    }
}
