//! Geometry of the memory-over-time plots.
//!
//! Curves are sampled on the unit square (time 0..=1, retention 0..=1) and
//! projected onto a plot frame with a fixed margin for the axes.

/// A point in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub const SAMPLE_COUNT: usize = 51;
pub const REVIEW_MARKS: [f64; 3] = [0.25, 0.5, 0.75];
const REVIEW_BOOSTS: [f64; 3] = [0.3, 0.2, 0.15];
const FORGETTING_RATE: f64 = 4.0;
const SPACED_RATE: f64 = 3.0;

/// Drawing surface of a plot, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    pub const DEFAULT: PlotFrame = PlotFrame {
        width: 640.0,
        height: 320.0,
    };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Project unit-square coordinates onto the frame.
    #[must_use]
    pub fn project(&self, time: f64, retention: f64) -> Point {
        Point {
            x: 60.0 + time * (self.width - 100.0),
            y: (self.height - 40.0) - retention * (self.height - 80.0),
        }
    }

    /// Polyline of the two axes: top of the memory axis, origin, end of the
    /// time axis.
    #[must_use]
    pub fn axes(&self) -> [Point; 3] {
        [
            Point { x: 60.0, y: 20.0 },
            Point {
                x: 60.0,
                y: self.height - 40.0,
            },
            Point {
                x: self.width - 20.0,
                y: self.height - 40.0,
            },
        ]
    }

    #[must_use]
    pub fn memory_label_at(&self) -> Point {
        Point { x: 10.0, y: 30.0 }
    }

    #[must_use]
    pub fn time_label_at(&self) -> Point {
        Point {
            x: self.width - 70.0,
            y: self.height - 10.0,
        }
    }
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn sample_time(index: usize) -> f64 {
    index as f64 / (SAMPLE_COUNT - 1) as f64
}

/// Plain exponential decay without reviews.
#[must_use]
pub fn forgetting_curve(frame: &PlotFrame) -> Vec<Point> {
    (0..SAMPLE_COUNT)
        .map(|idx| {
            let time = sample_time(idx);
            frame.project(time, (-FORGETTING_RATE * time).exp())
        })
        .collect()
}

/// Decay with a boost at the first sample after each review mark.
#[must_use]
pub fn spaced_curve(frame: &PlotFrame) -> Vec<Point> {
    let boosted: Vec<usize> = REVIEW_MARKS
        .iter()
        .map(|mark| (mark * (SAMPLE_COUNT - 1) as f64).floor() as usize + 1)
        .collect();
    let mut last = 1.0_f64;
    (0..SAMPLE_COUNT)
        .map(|idx| {
            let time = sample_time(idx);
            let mut retention = (-SPACED_RATE * time).exp();
            if let Some(slot) = boosted.iter().position(|candidate| *candidate == idx) {
                retention = (last + REVIEW_BOOSTS[slot]).min(1.0);
            }
            last = retention;
            frame.project(time, retention)
        })
        .collect()
}

/// Dots marking the review moments on the spaced curve.
#[must_use]
pub fn review_dots(frame: &PlotFrame) -> Vec<Point> {
    REVIEW_MARKS
        .iter()
        .map(|mark| frame.project(*mark, (-SPACED_RATE * mark).exp()))
        .collect()
}

/// SVG `points` attribute for a polyline.
#[must_use]
pub fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{:.1},{:.1}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}
