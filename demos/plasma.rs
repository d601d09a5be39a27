//! Renders a plasma gradient into an `Image` on all cores and reports
//! the interop buffer size.

use mullion::{Color, Extent, Hsv, Image, Pixel};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let extent = Extent::new(512, 512);
    let image = Image::par_from_fn(extent, |x, y| {
        let fx = f64::from(x) / 512.0;
        let fy = f64::from(y) / 512.0;

        let hue = (fx + (fy * std::f64::consts::TAU).sin() * 0.25).rem_euclid(1.0);
        let color = Color::from_hsv(Hsv { h: hue, s: 0.8, v: 1.0 }, 1.0);
        Pixel::from(color)
    })
    .expect("extent is within limits");

    let bytes = image.to_rgba_bytes();
    println!(
        "{}x{} plasma, {} bytes of RGBA, top-left = {:?}",
        image.width(),
        image.height(),
        bytes.len(),
        image[(0, 0)],
    );
}
