mod site_meta;

pub use runmap_config::BasePath;
pub use runmap_config::Config;
pub use runmap_config::NavLink;
pub use runmap_config::Profile;
pub use runmap_config::Site;

pub use self::site_meta::SiteMetadata;
pub use self::site_meta::SiteMetadataBuilder;
