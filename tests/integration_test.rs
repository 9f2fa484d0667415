use firgolden::config::{FilterConfig, FirConfig, InputConfig};
use firgolden::output::{OutputFormat, create_formatter};
use firgolden::run_filters;

#[test]
fn test_default_config_end_to_end() {
    let config = FirConfig::default();
    let runs = run_filters(&config).unwrap();
    let formatter = create_formatter(OutputFormat::Text);

    let lowpass = formatter.format(&runs[0], config.display_samples);
    assert!(lowpass.contains("LOWPASS FILTER (Moving Average)"));
    assert!(lowpass.contains("Coefficients: [0.25, 0.25, 0.25, 0.25]"));
    assert!(lowpass.contains("Sample  3:  1.0000"));
    assert!(lowpass.contains("Sample  7: -1.0000"));
    assert!(lowpass.contains("Sample 15:"));
    assert!(!lowpass.contains("Sample 16:"));

    let highpass = formatter.format(&runs[1], config.display_samples);
    assert!(highpass.contains("Sample  4: -0.5000"));
    assert!(highpass.contains("Sample  6:  0.5000"));
}

#[test]
fn test_toml_config_end_to_end() {
    let config = FirConfig::from_toml_str(
        r#"
        display_samples = 3

        [input]
        type = "samples"
        values = [2.0, 4.0, 6.0, 8.0]

        [[filters]]
        name = "pairwise mean"
        coefficients = [0.5, 0.5]
        "#,
    )
    .unwrap();

    let runs = run_filters(&config).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].output, vec![1.0, 3.0, 5.0, 7.0]);

    let csv = create_formatter(OutputFormat::Csv).format(&runs[0], config.display_samples);
    assert_eq!(csv.lines().count(), 3);
    assert_eq!(csv.lines().last(), Some("pairwise mean,2,6,5"));
}

#[test]
fn test_config_file_loaded_from_disk() {
    let path = std::env::temp_dir().join(format!("firgolden-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        [input]
        type = "square"
        half_period = 1
        cycles = 2
        amplitude = 2.0

        [[filters]]
        name = "difference"
        coefficients = [1.0, -1.0]
        "#,
    )
    .unwrap();

    let config = FirConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(
        config.input,
        InputConfig::Square {
            half_period: 1,
            cycles: 2,
            amplitude: 2.0
        }
    );
    assert_eq!(
        config.filters,
        vec![FilterConfig::new("difference", vec![1.0, -1.0])]
    );

    let runs = run_filters(&config).unwrap();
    assert_eq!(runs[0].output, vec![2.0, -4.0, 4.0, -4.0]);
}
