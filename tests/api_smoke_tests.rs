use scrubchart::api::{ChartEngine, ChartEngineConfig};
use scrubchart::core::{Insets, SamplePoint, Viewport, XScaleTuning};
use scrubchart::render::NullRenderer;

#[test]
fn engine_initializes_with_unit_domains() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(640, 360));
    let engine = ChartEngine::new(renderer, config).expect("engine init");

    assert_eq!(engine.x_domain(), (0.0, 1.0));
    assert_eq!(engine.y_domain(), (0.0, 1.0));
    assert!(!engine.has_data());
}

#[test]
fn invalid_viewport_is_rejected_at_construction() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(0, 360));
    assert!(ChartEngine::new(renderer, config).is_err());
}

#[test]
fn oversized_insets_are_rejected_at_construction() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(100, 100))
        .with_insets(Insets::uniform(80.0));
    assert!(ChartEngine::new(renderer, config).is_err());
}

#[test]
fn set_series_refits_both_domains() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500))
        .with_y_floor(0.0)
        .with_y_ceiling(100.0);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(2.0, 20.0), SamplePoint::new(8.0, 80.0)],
        )
        .expect("set series");

    assert_eq!(engine.x_domain(), (2.0, 8.0));
    assert_eq!(engine.y_domain(), (0.0, 100.0));
}

#[test]
fn set_series_sorts_points_by_x() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine
        .set_series(
            "balance",
            vec![
                SamplePoint::new(9.0, 3.0),
                SamplePoint::new(1.0, 1.0),
                SamplePoint::new(5.0, 2.0),
            ],
        )
        .expect("set series");

    let points = engine.series_points("balance").expect("series");
    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    assert_eq!(xs, vec![1.0, 5.0, 9.0]);
}

#[test]
fn non_finite_samples_are_rejected() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    assert!(
        engine
            .set_series("balance", vec![SamplePoint::new(f64::NAN, 1.0)])
            .is_err()
    );
    assert!(
        engine
            .set_series("balance", vec![SamplePoint::new(1.0, f64::INFINITY)])
            .is_err()
    );
}

#[test]
fn removing_last_series_returns_to_unit_domains() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(2.0, 20.0), SamplePoint::new(8.0, 80.0)],
        )
        .expect("set series");
    assert!(engine.remove_series("balance").expect("remove"));
    assert!(!engine.remove_series("balance").expect("remove missing"));

    assert_eq!(engine.x_domain(), (0.0, 1.0));
    assert_eq!(engine.y_domain(), (0.0, 1.0));
    assert!(!engine.has_data());
}

#[test]
fn series_keep_insertion_order() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    for name in ["gamma", "alpha", "beta"] {
        engine
            .set_series(name, vec![SamplePoint::new(0.0, 1.0)])
            .expect("set series");
    }
    assert_eq!(engine.series_names(), vec!["gamma", "alpha", "beta"]);
}

#[test]
fn pixel_mapping_round_trips() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(10.0, 100.0)],
        )
        .expect("set series");

    let px = engine.map_x_to_pixel(4.0).expect("x map");
    let recovered = engine.map_pixel_to_x(px).expect("x unmap");
    assert!((recovered - 4.0).abs() <= 1e-9);

    let py = engine.map_value_to_pixel(40.0).expect("y map");
    let recovered = engine.map_pixel_to_value(py).expect("y unmap");
    assert!((recovered - 40.0).abs() <= 1e-9);
}

#[test]
fn x_tuning_padding_flows_into_domain() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500)).with_x_tuning(XScaleTuning {
        padding_ratio: 0.5,
        min_span_absolute: 1.0,
    });
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(10.0, 1.0)],
        )
        .expect("set series");

    assert_eq!(engine.x_domain(), (-5.0, 15.0));
}

#[test]
fn empty_no_data_message_is_rejected() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500)).with_no_data_message("");
    assert!(ChartEngine::new(renderer, config).is_err());
}
