#![forbid(unsafe_code)]

pub mod ebbinghaus;
pub mod error;
pub mod games;
pub mod model;
pub mod navigation;
pub mod timer;

pub use error::Error;
