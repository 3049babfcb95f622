use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use scrubchart::api::{ChartEngine, ChartEngineConfig};
use scrubchart::core::{SamplePoint, Viewport};
use scrubchart::render::NullRenderer;

const DAY: f64 = 86_400.0;
// 2021-03-14 00:00:00 UTC
const BASE_TS: f64 = 1_615_680_000.0;

fn engine_with_dated_data() -> ChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![
                SamplePoint::new(BASE_TS, 1_000.0),
                SamplePoint::new(BASE_TS + DAY, 1_250.5),
                SamplePoint::new(BASE_TS + 2.0 * DAY, 1_100.0),
            ],
        )
        .expect("set series");
    engine
}

#[test]
fn snapshot_summarizes_series_and_domains() {
    let engine = engine_with_dated_data();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(1000, 500));
    assert_eq!(snapshot.series.len(), 1);
    assert_eq!(snapshot.series[0].name, "balance");
    assert_eq!(snapshot.series[0].points_len, 3);
    assert_eq!(snapshot.x_domain, (BASE_TS, BASE_TS + 2.0 * DAY));
    assert!(snapshot.tooltip_date.is_none());
    assert!(snapshot.readout_value.is_none());
}

#[test]
fn snapshot_formats_tooltip_for_snapped_sample() {
    let mut engine = engine_with_dated_data();
    let near_second = engine.map_x_to_pixel(BASE_TS + DAY * 1.1).expect("x map");
    engine.scrub_begin(near_second, 200.0).expect("scrub begin");

    let snapshot = engine.snapshot();
    assert!(snapshot.scrub.active);
    assert_eq!(snapshot.tooltip_date.as_deref(), Some("15/03"));
    assert_eq!(snapshot.readout_value.as_deref(), Some("1250.50"));
}

#[test]
fn dated_samples_build_from_chrono_and_decimal() {
    let time = Utc
        .timestamp_opt(BASE_TS as i64, 0)
        .single()
        .expect("valid time");
    let point = SamplePoint::from_dated_value(time, Decimal::new(125_050, 2)).expect("sample");
    assert!((point.x - BASE_TS).abs() <= 1e-9);
    assert!((point.y - 1_250.5).abs() <= 1e-9);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut engine = engine_with_dated_data();
    let near_first = engine.map_x_to_pixel(BASE_TS).expect("x map");
    engine.scrub_begin(near_first, 200.0).expect("scrub begin");

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"tooltip_date\""));

    let decoded: scrubchart::api::ChartSnapshot =
        serde_json::from_str(&json).expect("decode snapshot");
    assert_eq!(decoded, engine.snapshot());
}
