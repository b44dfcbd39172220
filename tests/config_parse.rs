use qrlens::{config::Config, Color, ECLevel, PaletteConfig};

#[test]
fn parse_example_config() {
    let raw = include_str!("../qrlens.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.palette, PaletteConfig::default());
    assert_eq!(cfg.render.ec_level, ECLevel::H);
    assert_eq!(cfg.palette.default_primary, Color::new(255, 0, 0));
    assert!(!cfg.logging.json);
}

#[test]
fn reject_bad_color() {
    let res: Result<Config, _> = toml::from_str("[palette]\ndefault_primary = \"#zzzzzz\"\n");
    assert!(res.is_err());
}
