use runmap::BasePath;
use runmap::Config;
use runmap::Profile;
use runmap::SiteMetadataBuilder;

#[test]
fn workouts_at_domain_root() {
    let config = Config {
        profile: Profile::Workouts,
        ..Default::default()
    };
    let meta = SiteMetadataBuilder::from_config(config).build();
    assert_eq!(meta.title, "Workouts Map");
    assert_eq!(meta.nav[0].name, "Summary");
    assert_eq!(meta.nav[0].url, "/summary");
}

#[test]
fn workouts_under_sub_path() {
    let config = Config {
        profile: Profile::Workouts,
        base_path: BasePath::new("/app"),
        ..Default::default()
    };
    let meta = SiteMetadataBuilder::from_config(config).build();
    assert_eq!(meta.nav[0].url, "/app/summary");
    assert_eq!(meta.nav[1].url, "/app/total");
    assert_eq!(meta.nav[2].url, "https://sayidhe.com");
    assert_eq!(meta.nav[3].url, "https://github.sayidhe.com/");
}

#[test]
fn nav_order_is_preserved() {
    let meta = SiteMetadataBuilder::from_config(Config::default()).build();
    let names: Vec<_> = meta.nav.iter().map(|link| link.name.as_str()).collect();
    assert_eq!(names, ["Summary", "Summary", "Blog", "Github"]);
}

#[test]
fn minimal_profile_ignores_base_path() {
    let at_root = Config {
        profile: Profile::Minimal,
        ..Default::default()
    };
    let under_sub_path = Config {
        profile: Profile::Minimal,
        base_path: BasePath::new("/app"),
        ..Default::default()
    };
    let at_root = SiteMetadataBuilder::from_config(at_root).build();
    let under_sub_path = SiteMetadataBuilder::from_config(under_sub_path).build();
    assert_eq!(at_root.title, "Workouts Map");
    assert_eq!(at_root, under_sub_path);
}

#[test]
fn hiking_profile() {
    let config = Config {
        profile: Profile::Hiking,
        ..Default::default()
    };
    let meta = SiteMetadataBuilder::from_config(config).build();
    assert_eq!(meta.title, "Hiking Map");
    assert_eq!(meta.description, "Sayid & Nuo hikings");
    let names: Vec<_> = meta.nav.iter().map(|link| link.name.as_str()).collect();
    assert_eq!(names, ["Blog", "Github"]);
}

#[test]
fn build_is_deterministic() {
    let config = Config {
        base_path: BasePath::new("/app"),
        ..Default::default()
    };
    let first = SiteMetadataBuilder::from_config(config.clone()).build();
    let second = SiteMetadataBuilder::from_config(config).build();
    assert_eq!(first, second);
}

#[test]
fn config_file_end_to_end() {
    let config = Config::from_file("tests/fixtures/_runmap.yml").unwrap();
    let meta = SiteMetadataBuilder::from_config(config).build();
    assert_eq!(meta.title, "Workouts Map");
    assert_eq!(meta.description, "Team workouts");
    assert_eq!(meta.nav[0].url, "/app/summary");
}
