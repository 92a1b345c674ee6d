use super::*;

const BASE_URL: &str = "https://sport.sayidhe.com";
const LOGO: &str = "https://avatars.githubusercontent.com/u/8212913?v=4";
const KEYWORDS: &str = "workouts, running, cycling, riding, roadtrip, hiking, swimming";

/// Built-in deployment profiles.  Each one is a complete, self-contained
/// set of site data; a config file starts from one of these and overrides
/// individual fields.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
#[derive(Default)]
pub enum Profile {
    Hiking,
    #[default]
    Workouts,
    Minimal,
    #[cfg(not(feature = "unstable"))]
    #[doc(hidden)]
    #[serde(other)]
    Unknown,
}

impl Profile {
    /// Fully-populated site data for this profile.
    pub fn site(self) -> Site {
        match self {
            Profile::Hiking => Site {
                title: Some("Hiking Map".to_owned()),
                base_url: Some(BASE_URL.to_owned()),
                description: Some("Sayid & Nuo hikings".to_owned()),
                keywords: Some(KEYWORDS.to_owned()),
                logo: Some(LOGO.to_owned()),
                nav: external_links(),
            },
            Profile::Workouts => {
                // The summary pages live under the deployment root; their
                // urls pick up the base path when the site is built.
                let mut nav = vec![
                    NavLink::new("Summary", "/summary"),
                    NavLink::new("Summary", "/total"),
                ];
                nav.extend(external_links());
                Site {
                    title: Some("Workouts Map".to_owned()),
                    base_url: Some(BASE_URL.to_owned()),
                    description: Some("Sayid & Nuo workouts".to_owned()),
                    keywords: Some(KEYWORDS.to_owned()),
                    logo: Some(LOGO.to_owned()),
                    nav,
                }
            }
            Profile::Minimal => Site {
                nav: external_links(),
                ..Profile::Workouts.site()
            },
            #[cfg(not(feature = "unstable"))]
            Profile::Unknown => {
                log::warn!("Unknown profile, falling back to `{:?}`", Profile::default());
                Profile::default().site()
            }
        }
    }
}

fn external_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Blog", "https://sayidhe.com"),
        NavLink::new("Github", "https://github.sayidhe.com/"),
    ]
}
