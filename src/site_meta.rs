use std::fmt;

use runmap_config::BasePath;
use runmap_config::Config;
use runmap_config::NavLink;
use runmap_config::Site;

/// Site identity and navigation with every field resolved, ready for a
/// rendering layer.  Immutable once built; share it freely.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub base_url: String,
    pub description: String,
    pub keywords: String,
    pub logo: String,
    pub nav: Vec<NavLink>,
}

impl fmt::Display for SiteMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteMetadataBuilder {
    site: Site,
    base_path: BasePath,
}

impl SiteMetadataBuilder {
    pub fn from_config(config: Config) -> Self {
        log::debug!("Resolving site metadata for profile `{:?}`", config.profile);
        Self {
            site: config.resolved_site(),
            base_path: config.base_path,
        }
    }

    /// Total: absent fields degrade to empty strings and root-relative nav
    /// urls are joined onto the base path.
    pub fn build(self) -> SiteMetadata {
        let Self { site, base_path } = self;
        let Site {
            title,
            base_url,
            description,
            keywords,
            logo,
            nav,
        } = site;

        let base_url = base_url.map(|mut l| {
            if l.ends_with('/') {
                l.pop();
            }
            l
        });

        let nav = nav
            .into_iter()
            .map(|link| resolve_link(link, &base_path))
            .collect();

        SiteMetadata {
            title: title.unwrap_or_default(),
            base_url: base_url.unwrap_or_default(),
            description: description.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
            logo: logo.unwrap_or_default(),
            nav,
        }
    }
}

fn resolve_link(link: NavLink, base_path: &BasePath) -> NavLink {
    if link.is_root_relative() {
        let url = base_path.join(&link.url);
        NavLink::new(link.name, url)
    } else {
        link
    }
}
