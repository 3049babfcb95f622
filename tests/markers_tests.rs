use scrubchart::api::{ChartEngine, ChartEngineConfig};
use scrubchart::core::{PlotRect, SamplePoint, Viewport, XScale, YScale};
use scrubchart::extensions::{MarkerVisibility, markers_in_cursor_column, place_point_markers};
use scrubchart::render::{ChartLayerKind, NullRenderer};

const PLOT: PlotRect = PlotRect {
    left: 0.0,
    top: 0.0,
    width: 100.0,
    height: 50.0,
};

#[test]
fn markers_project_every_sample() {
    let x_scale = XScale::new(0.0, 10.0).expect("x scale");
    let y_scale = YScale::new(0.0, 100.0).expect("y scale");
    let points = vec![
        SamplePoint::new(2.0, 20.0),
        SamplePoint::new(5.0, 50.0),
        SamplePoint::new(8.0, 80.0),
    ];

    let markers = place_point_markers(
        [("balance", points.as_slice())],
        x_scale,
        y_scale,
        PLOT,
        3.5,
    )
    .expect("placement");

    assert_eq!(markers.len(), 3);
    assert_eq!(markers[1].series, "balance");
    assert_eq!(markers[1].point_index, 1);
    assert!((markers[1].x - 50.0).abs() <= 1e-9);
    assert!((markers[1].y - 25.0).abs() <= 1e-9);
}

#[test]
fn edge_markers_clamp_inside_plot_span() {
    let x_scale = XScale::new(0.0, 10.0).expect("x scale");
    let y_scale = YScale::new(0.0, 100.0).expect("y scale");
    let points = vec![SamplePoint::new(0.0, 50.0), SamplePoint::new(10.0, 50.0)];

    let radius = 3.5;
    let markers = place_point_markers(
        [("balance", points.as_slice())],
        x_scale,
        y_scale,
        PLOT,
        radius,
    )
    .expect("placement");

    assert!((markers[0].x - radius).abs() <= 1e-9);
    assert!((markers[1].x - (PLOT.width - radius)).abs() <= 1e-9);
}

#[test]
fn invalid_radius_is_rejected() {
    let x_scale = XScale::new(0.0, 10.0).expect("x scale");
    let y_scale = YScale::new(0.0, 100.0).expect("y scale");
    let points = vec![SamplePoint::new(5.0, 50.0)];

    assert!(
        place_point_markers(
            [("balance", points.as_slice())],
            x_scale,
            y_scale,
            PLOT,
            0.0,
        )
        .is_err()
    );
}

#[test]
fn cursor_column_filter_keeps_matching_pixel_column() {
    let x_scale = XScale::new(0.0, 10.0).expect("x scale");
    let y_scale = YScale::new(0.0, 100.0).expect("y scale");
    let first = vec![SamplePoint::new(2.0, 20.0), SamplePoint::new(8.0, 80.0)];
    let second = vec![SamplePoint::new(2.0, 60.0), SamplePoint::new(8.0, 10.0)];

    let markers = place_point_markers(
        [("a", first.as_slice()), ("b", second.as_slice())],
        x_scale,
        y_scale,
        PLOT,
        2.0,
    )
    .expect("placement");

    let at_cursor = markers_in_cursor_column(&markers, 20.0);
    assert_eq!(at_cursor.len(), 2);
    assert!(at_cursor.iter().all(|marker| (marker.x - 20.0).abs() <= 1e-9));
}

#[test]
fn hidden_markers_never_reach_the_frame() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(0.0, 10.0), SamplePoint::new(10.0, 90.0)],
        )
        .expect("set series");

    let frame = engine.build_render_frame().expect("frame");
    let layer = frame.layer(ChartLayerKind::Markers).expect("markers layer");
    assert!(layer.circles.is_empty());
}

#[test]
fn always_markers_cover_every_sample() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500))
        .with_marker_visibility(MarkerVisibility::Always);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![
                SamplePoint::new(0.0, 10.0),
                SamplePoint::new(5.0, 50.0),
                SamplePoint::new(10.0, 90.0),
            ],
        )
        .expect("set series");

    let frame = engine.build_render_frame().expect("frame");
    let layer = frame.layer(ChartLayerKind::Markers).expect("markers layer");
    assert_eq!(layer.circles.len(), 3);
}

#[test]
fn scrub_only_markers_follow_the_cursor() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500))
        .with_marker_visibility(MarkerVisibility::ScrubOnly);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(
            "balance",
            vec![
                SamplePoint::new(0.0, 10.0),
                SamplePoint::new(5.0, 50.0),
                SamplePoint::new(10.0, 90.0),
            ],
        )
        .expect("set series");

    // No gesture: nothing to show.
    let frame = engine.build_render_frame().expect("frame");
    assert!(
        frame
            .layer(ChartLayerKind::Markers)
            .expect("markers layer")
            .circles
            .is_empty()
    );

    let near_middle = engine.map_x_to_pixel(5.1).expect("x map");
    engine.scrub_begin(near_middle, 200.0).expect("scrub begin");

    let frame = engine.build_render_frame().expect("frame");
    let layer = frame.layer(ChartLayerKind::Markers).expect("markers layer");
    assert_eq!(layer.circles.len(), 1);

    let expected_x = engine.map_x_to_pixel(5.0).expect("expected x");
    assert!((layer.circles[0].cx - expected_x).abs() <= 1.0);
}
