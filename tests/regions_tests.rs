use scrubchart::api::{ChartEngine, ChartEngineConfig};
use scrubchart::core::{PlotRect, SamplePoint, Viewport, YScale};
use scrubchart::extensions::{Region, RegionStyling, project_region_bands};
use scrubchart::render::{ChartLayerKind, Color, NullRenderer};

const PLOT: PlotRect = PlotRect {
    left: 10.0,
    top: 0.0,
    width: 100.0,
    height: 100.0,
};

fn y_scale() -> YScale {
    YScale::new(0.0, 100.0).expect("y scale")
}

#[test]
fn band_covers_full_plot_width_between_bounds() {
    let regions = vec![Region::new(20.0, 60.0, Color::rgb(0.2, 0.4, 0.6))];
    let bands = project_region_bands(&regions, RegionStyling::default(), y_scale(), PLOT)
        .expect("projection");

    assert_eq!(bands.len(), 1);
    let band = &bands[0];
    assert!((band.x - PLOT.left).abs() <= 1e-9);
    assert!((band.width - PLOT.width).abs() <= 1e-9);
    // 60 maps to y=40, 20 maps to y=80 on the inverted scale.
    assert!((band.y - 40.0).abs() <= 1e-9);
    assert!((band.height - 40.0).abs() <= 1e-9);
}

#[test]
fn band_normalizes_reversed_bounds() {
    let regions = vec![Region::new(60.0, 20.0, Color::rgb(0.2, 0.4, 0.6))];
    let bands = project_region_bands(&regions, RegionStyling::default(), y_scale(), PLOT)
        .expect("projection");

    let band = &bands[0];
    assert!((band.y - 40.0).abs() <= 1e-9);
    assert!(band.height > 0.0);
}

#[test]
fn fill_opacity_resolves_override_then_styling_then_default() {
    let fill = Color::rgb(1.0, 0.0, 0.0);
    let regions = vec![
        Region::new(0.0, 10.0, fill).with_fill_opacity(0.9),
        Region::new(10.0, 20.0, fill),
        Region::new(20.0, 30.0, fill),
    ];

    let styling = RegionStyling {
        fill_opacity: Some(0.25),
        ..RegionStyling::default()
    };
    let bands =
        project_region_bands(&regions, styling, y_scale(), PLOT).expect("projection");
    assert!((bands[0].fill.alpha - 0.9).abs() <= 1e-9);
    assert!((bands[1].fill.alpha - 0.25).abs() <= 1e-9);

    let bands = project_region_bands(&regions, RegionStyling::default(), y_scale(), PLOT)
        .expect("projection");
    assert!((bands[1].fill.alpha - 0.5).abs() <= 1e-9);
    assert!((bands[2].fill.alpha - 0.5).abs() <= 1e-9);
}

#[test]
fn label_anchors_at_to_edge_with_offset_cascade() {
    let fill = Color::rgb(0.0, 0.5, 0.5);
    let regions = vec![
        Region::new(20.0, 60.0, fill)
            .with_label("danger")
            .with_label_offset(40.0, 5.0),
        Region::new(20.0, 60.0, fill).with_label("shared"),
    ];

    let styling = RegionStyling {
        label_offset_left: Some(30.0),
        label_offset_top: Some(2.0),
        ..RegionStyling::default()
    };
    let bands =
        project_region_bands(&regions, styling, y_scale(), PLOT).expect("projection");

    let override_label = bands[0].label.as_ref().expect("label");
    assert!((override_label.x - (PLOT.left + 40.0)).abs() <= 1e-9);
    assert!((override_label.y - 45.0).abs() <= 1e-9);

    let shared_label = bands[1].label.as_ref().expect("label");
    assert!((shared_label.x - (PLOT.left + 30.0)).abs() <= 1e-9);
    assert!((shared_label.y - 42.0).abs() <= 1e-9);
}

#[test]
fn default_label_offset_is_twenty_left_zero_top() {
    let regions = vec![
        Region::new(20.0, 60.0, Color::rgb(0.0, 0.5, 0.5)).with_label("default"),
    ];
    let bands = project_region_bands(&regions, RegionStyling::default(), y_scale(), PLOT)
        .expect("projection");

    let label = bands[0].label.as_ref().expect("label");
    assert!((label.x - (PLOT.left + 20.0)).abs() <= 1e-9);
    assert!((label.y - 40.0).abs() <= 1e-9);
}

#[test]
fn invalid_region_bounds_are_rejected() {
    let regions = vec![Region::new(f64::NAN, 10.0, Color::rgb(0.2, 0.4, 0.6))];
    assert!(
        project_region_bands(&regions, RegionStyling::default(), y_scale(), PLOT).is_err()
    );
}

#[test]
fn engine_renders_regions_under_series() {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine
        .set_series(
            "balance",
            vec![SamplePoint::new(0.0, 10.0), SamplePoint::new(10.0, 90.0)],
        )
        .expect("set series");
    engine
        .set_regions(vec![
            Region::new(20.0, 40.0, Color::rgb(0.8, 0.3, 0.3)).with_label("low"),
        ])
        .expect("set regions");

    assert_eq!(engine.regions().len(), 1);

    let frame = engine.build_render_frame().expect("frame");
    let layer = frame.layer(ChartLayerKind::Regions).expect("regions layer");
    assert_eq!(layer.rects.len(), 1);
    assert_eq!(layer.texts.len(), 1);
    assert_eq!(layer.texts[0].text, "low");
}
