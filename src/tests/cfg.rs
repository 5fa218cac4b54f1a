use rstest::*;

use crate::prelude::{Config, ConfigError, IonosphereStrategy};

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.frequencies, 1);
    assert_eq!(cfg.ionosphere, IonosphereStrategy::Broadcast);
    assert_eq!(cfg.num_frequencies(), 1);
    assert!(cfg.validate().is_ok());
}

#[rstest]
#[case(1, IonosphereStrategy::Off, 1)]
#[case(2, IonosphereStrategy::Broadcast, 2)]
#[case(3, IonosphereStrategy::Broadcast, 3)]
#[case(2, IonosphereStrategy::IonosphereFree, 1)]
#[case(3, IonosphereStrategy::IonosphereFree, 1)]
fn number_of_frequencies(
    #[case] frequencies: usize,
    #[case] ionosphere: IonosphereStrategy,
    #[case] expected: usize,
) {
    let cfg = Config::default()
        .with_frequencies(frequencies)
        .with_ionosphere(ionosphere);

    assert_eq!(cfg.num_frequencies(), expected);
    assert!(cfg.validate().is_ok());
}

#[rstest]
#[case(0)]
#[case(4)]
fn invalid_frequencies(#[case] frequencies: usize) {
    let cfg = Config::default().with_frequencies(frequencies);
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::InvalidFrequencies(frequencies))
    );
}

#[test]
#[cfg(feature = "serde")]
fn config_deserialization() {
    let cfg: Config = serde_json::from_str(
        r#"{
            "frequencies": 2,
            "ionosphere": "IonosphereFree"
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.frequencies, 2);
    assert_eq!(cfg.ionosphere, IonosphereStrategy::IonosphereFree);
    assert_eq!(cfg.num_frequencies(), 1);

    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
}
