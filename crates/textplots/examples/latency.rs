//! Request latency distributions as text boxplots.
//!
//! Run with: cargo run -p textplots --example latency

use textplots::{Boxplot, GlyphSet, PlotError};

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let get = [12.0, 15.0, 14.0, 13.0, 18.0, 22.0, 16.0, 15.0, 14.0, 30.0];
    let put = [20.0, 25.0, 24.0, 28.0, 35.0, 40.0, 26.0, 27.0, 29.0, 31.0];
    let delete = [8.0, 9.0, 9.5, 10.0, 11.0, 45.0];

    let plot = Boxplot::builder([("GET", &get[..]), ("PUT", &put[..]), ("DELETE", &delete[..])])
        .width(60)
        .build()?;
    println!("{plot}");

    // Zoom into the busy part of the range; markers outside it disappear.
    let zoomed = Boxplot::builder([("GET", &get[..]), ("PUT", &put[..]), ("DELETE", &delete[..])])
        .width(60)
        .plot_limits(Some(10.0), Some(30.0))
        .glyphs(GlyphSet::unicode())
        .build()?;
    println!("{zoomed}");

    Ok(())
}
