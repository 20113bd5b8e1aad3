use mt_config::*;

fn sample() -> Config {
    Config {
        version: LATEST_VERSION,
        name: "Roundtrip".to_string(),
        transport: TransportDef {
            model: "MixtureAveraged".to_string(),
            closure: None,
        },
        mixture: MixtureDef {
            temperature: "1000 K".into(),
            pressure: 2.0e5.into(),
            composition: CompositionDef::Mixture {
                fractions: vec![("H2".into(), 0.3), ("N2".into(), 0.7)],
            },
            density: None,
            cp_mass: None,
        },
    }
}

#[test]
fn roundtrip_yaml() {
    let config = sample();
    let path = std::env::temp_dir().join("mt_config_roundtrip.yaml");

    save_yaml(&path, &config).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn roundtrip_json() {
    let config = sample();
    let path = std::env::temp_dir().join("mt_config_roundtrip.json");

    save_json(&path, &config).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn invalid_config_is_not_saved() {
    let mut config = sample();
    config.mixture.pressure = (-1.0).into();
    let path = std::env::temp_dir().join("mt_config_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &config),
        Err(ConfigError::Validation(_))
    ));
}
