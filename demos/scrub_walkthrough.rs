//! Headless scrub session: feeds a synthetic balance series into the engine,
//! sweeps the cursor across the plot, and prints the resulting snapshots.
//!
//! Run with `cargo run --example scrub_walkthrough`.

use scrubchart::api::{ChartEngine, ChartEngineConfig};
use scrubchart::core::{SamplePoint, Viewport};
use scrubchart::render::NullRenderer;

fn main() -> scrubchart::ChartResult<()> {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(720, 360));
    let mut engine = ChartEngine::new(renderer, config)?;

    // Thirty days of a slowly growing balance, starting 2021-03-14 UTC.
    let base_ts = 1_615_680_000.0;
    let day = 86_400.0;
    let points: Vec<SamplePoint> = (0..30)
        .map(|i| {
            let drift = f64::from(i) * 12.5;
            let wobble = f64::from(i % 7) * 4.0;
            SamplePoint::new(base_ts + f64::from(i) * day, 1_000.0 + drift + wobble)
        })
        .collect();
    engine.set_series("balance", points)?;
    engine.render()?;

    let plot = engine.plot_rect()?;
    engine.scrub_begin(plot.left, plot.top + plot.height * 0.5)?;
    for step in 0..=4 {
        let x = plot.left + plot.width * f64::from(step) / 4.0;
        engine.scrub_move(x, plot.top + plot.height * 0.5)?;
        let snapshot = engine.snapshot();
        println!(
            "cursor at {:5.1}px -> date {:?}, value {:?}",
            x, snapshot.tooltip_date, snapshot.readout_value
        );
    }
    engine.scrub_end(plot.right(), plot.top + plot.height * 0.5)?;

    println!("{}", engine.snapshot_json_pretty()?);
    Ok(())
}
