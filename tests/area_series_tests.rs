use scrubchart::core::{PlotRect, SamplePoint, XScale, YScale, project_area_geometry};

const PLOT: PlotRect = PlotRect {
    left: 0.0,
    top: 0.0,
    width: 100.0,
    height: 50.0,
};

fn scales() -> (XScale, YScale) {
    let x = XScale::new(0.0, 10.0).expect("x scale");
    let y = YScale::new(0.0, 100.0).expect("y scale");
    (x, y)
}

#[test]
fn empty_series_produces_empty_geometry() {
    let (x_scale, y_scale) = scales();
    let geometry = project_area_geometry(&[], x_scale, y_scale, PLOT).expect("projection");
    assert!(geometry.line_points.is_empty());
    assert!(geometry.fill_polygon.is_empty());
}

#[test]
fn fill_polygon_closes_against_plot_bottom() {
    let (x_scale, y_scale) = scales();
    let points = vec![
        SamplePoint::new(0.0, 50.0),
        SamplePoint::new(5.0, 80.0),
        SamplePoint::new(10.0, 20.0),
    ];

    let geometry = project_area_geometry(&points, x_scale, y_scale, PLOT).expect("projection");
    assert_eq!(geometry.line_points.len(), 3);
    assert_eq!(geometry.fill_polygon.len(), 6);

    let baseline = PLOT.bottom();
    let first = geometry.fill_polygon[0];
    let last = geometry.fill_polygon[geometry.fill_polygon.len() - 1];

    // Leading and trailing baseline anchors share the first point's x.
    assert!((first.y - baseline).abs() <= 1e-9);
    assert!((last.y - baseline).abs() <= 1e-9);
    assert!((first.x - last.x).abs() <= 1e-9);

    // The second-to-last vertex drops from the last data point to baseline.
    let penultimate = geometry.fill_polygon[geometry.fill_polygon.len() - 2];
    assert!((penultimate.y - baseline).abs() <= 1e-9);
    assert!((penultimate.x - geometry.line_points[2].x).abs() <= 1e-9);
}

#[test]
fn line_points_match_polyline_projection() {
    let (x_scale, y_scale) = scales();
    let points = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(10.0, 100.0)];

    let geometry = project_area_geometry(&points, x_scale, y_scale, PLOT).expect("projection");
    assert!((geometry.line_points[0].y - PLOT.bottom()).abs() <= 1e-9);
    assert!((geometry.line_points[1].y - PLOT.top).abs() <= 1e-9);
}
