//! Small self-contained slide games.
//!
//! Each controller is UI-agnostic: timers live in the view layer and drive the
//! controllers through their `tick`-style methods.

pub mod chunks;
pub mod counter;
pub mod curves;
pub mod fade;
pub mod letters;
pub mod magic;
pub mod matchup;
pub mod quiz;
pub mod recall;
pub mod swim;
pub mod synapse;
pub mod writing;
