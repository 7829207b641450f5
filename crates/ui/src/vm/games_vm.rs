use memory_core::games::curves::Point;

/// Background of the letter-test countdown ring.
#[must_use]
pub fn ring_background(degrees: f64) -> String {
    format!(
        "background: conic-gradient(var(--accent) {degrees:.0}deg, rgba(255, 255, 255, 0.12) {degrees:.0}deg);"
    )
}

/// Inline opacity for a whole-percent value.
#[must_use]
pub fn opacity_style(percent: u8) -> String {
    format!("opacity: {:.2};", f64::from(percent.min(100)) / 100.0)
}

/// SVG path for a polyline, `None` when there is nothing to draw.
#[must_use]
pub fn path_data(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut data = format!("M{:.1} {:.1}", first.x, first.y);
    for point in rest {
        data.push_str(&format!(" L{:.1} {:.1}", point.x, point.y));
    }
    Some(data)
}
