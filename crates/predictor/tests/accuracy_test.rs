//! Accuracy integration tests: run the full prediction pipeline on
//! synthetic seasonal series and check the out-of-sample error.

use common::{metrics, AppConfig, SmoothingConfig};
use predictor::{forecast, predict, PredictionInput};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn multiplicative_series(n: usize, period: usize, slope: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * i as f64 / period as f64;
            (500.0 + slope * i as f64) * (1.0 + 0.25 * phase.sin())
        })
        .collect()
}

fn holdout_mase(values: &[f64], train_len: usize, config: SmoothingConfig) -> f64 {
    let train = &values[..train_len];
    let actual = &values[train_len..train_len + config.horizon];

    let result = predict(&PredictionInput::new(train.to_vec(), config))
        .expect("pipeline should succeed");
    let predicted: Vec<f64> = result
        .forecast
        .ahead()
        .iter()
        .map(|v| v.expect("out-of-sample slots are populated"))
        .collect();

    metrics::mase(&predicted, actual, train, config.period)
}

#[test]
fn test_seasonal_trend_accuracy() {
    init_tracing();
    let period = 12;
    let values = multiplicative_series(120 + period, period, 2.0);
    let config = SmoothingConfig::new(0.3, 0.1, 0.3, period, period);

    let mase = holdout_mase(&values, 120, config);
    assert!(mase < 1.0, "MASE = {mase:.3}, expected better than seasonal naive");
}

#[test]
fn test_flat_seasonal_accuracy() {
    init_tracing();
    let period = 7;
    let values = multiplicative_series(70 + period, period, 0.0);
    let config = SmoothingConfig::new(0.2, 0.05, 0.2, period, 4);

    let result = predict(&PredictionInput::new(values[..70].to_vec(), config)).unwrap();
    for (h, (predicted, actual)) in result
        .forecast
        .ahead()
        .iter()
        .zip(&values[70..])
        .enumerate()
    {
        let predicted = predicted.unwrap();
        assert!(
            (predicted - actual).abs() / actual < 0.05,
            "h={h}: forecast={predicted:.1}, actual={actual:.1}"
        );
    }
}

#[test]
fn test_config_file_drives_pipeline() {
    init_tracing();
    let json = r#"{ "smoothing": { "alpha": 0.5, "beta": 0.4, "gamma": 0.6, "period": 6, "horizon": 4 } }"#;
    let app = AppConfig::from_json(json).unwrap();

    let series: Vec<f64> = multiplicative_series(24, 6, 5.0);
    let result = predict(&PredictionInput::new(series.clone(), app.smoothing)).unwrap();
    let direct = forecast(&series, 0.5, 0.4, 0.6, 6, 4).unwrap();

    assert_eq!(result.forecast.to_dense(), direct);
}

#[test]
fn test_concurrent_callers_agree() {
    init_tracing();
    let series = multiplicative_series(60, 12, 1.5);
    let expected = forecast(&series, 0.4, 0.2, 0.3, 12, 6).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| forecast(&series, 0.4, 0.2, 0.3, 12, 6).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
