use std::time::Duration;

use rand::Rng;

use super::curves::Point;

pub const WRITING_FRAMES: u32 = 120;
pub const WRITING_FRAME: Duration = Duration::from_millis(16);
const FRAME_STEP: f64 = 0.01;
const MARGIN: f64 = 40.0;
const SAMPLE_SPACING: f64 = 8.0;
const MAX_JITTER: f64 = 20.0;

/// Parameters of one drawn frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WritingFrame {
    /// Share of the line drawn, 0..=1.
    pub progress: f64,
    /// Jitter amplitude, 1 (shaky beginner) down to 0 (practised hand).
    pub shake: f64,
}

impl WritingFrame {
    pub const RESET: WritingFrame = WritingFrame {
        progress: 0.0,
        shake: 1.0,
    };
}

/// "Practice smooths the path": a line that steadies as it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WritingAnimation {
    frame: u32,
}

impl WritingAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&mut self) {
        self.frame = 0;
    }

    /// Advance one frame; `None` once the animation has finished.
    pub fn next_frame(&mut self) -> Option<WritingFrame> {
        if self.frame >= WRITING_FRAMES {
            return None;
        }
        self.frame += 1;
        let t = f64::from(self.frame) * FRAME_STEP;
        Some(WritingFrame {
            progress: t.min(1.0),
            shake: (1.0 - t * 1.2).max(0.0),
        })
    }
}

/// Sample the line for `frame` on a `width`×`height` canvas.
///
/// Points run from the left margin up to `(width - margin) * progress`.
pub fn jitter_line<R: Rng + ?Sized>(
    frame: WritingFrame,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Point> {
    let end_x = (width - MARGIN) * frame.progress;
    let mid_y = height / 2.0;
    let mut points = Vec::new();
    let mut x = MARGIN;
    while x <= end_x {
        let jitter = (rng.random::<f64>() - 0.5) * MAX_JITTER * frame.shake;
        points.push(Point { x, y: mid_y + jitter });
        x += SAMPLE_SPACING;
    }
    points
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn animation_runs_fixed_frames_and_settles() {
        let mut animation = WritingAnimation::new();
        let mut last = None;
        let mut count = 0;
        while let Some(frame) = animation.next_frame() {
            last = Some(frame);
            count += 1;
        }
        assert_eq!(count, WRITING_FRAMES);
        let last = last.unwrap();
        assert!((last.progress - 1.0).abs() < f64::EPSILON);
        assert!(last.shake.abs() < f64::EPSILON);
        animation.restart();
        assert!(animation.next_frame().is_some());
    }

    #[test]
    fn empty_progress_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(jitter_line(WritingFrame::RESET, 600.0, 200.0, &mut rng).is_empty());
    }

    #[test]
    fn calm_line_is_flat_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let frame = WritingFrame {
            progress: 1.0,
            shake: 0.0,
        };
        let points = jitter_line(frame, 600.0, 200.0, &mut rng);
        assert_eq!(points.first().unwrap().x, 40.0);
        assert!(points.last().unwrap().x <= 560.0);
        assert!(points.iter().all(|point| (point.y - 100.0).abs() < f64::EPSILON));
    }

    #[test]
    fn shaky_line_stays_within_jitter_band() {
        let mut rng = StdRng::seed_from_u64(11);
        let frame = WritingFrame {
            progress: 1.0,
            shake: 1.0,
        };
        let points = jitter_line(frame, 600.0, 200.0, &mut rng);
        assert!(points.iter().all(|point| (point.y - 100.0).abs() <= 10.0));
    }
}
