mod actions;
mod state;
mod view;

pub use actions::EbbinghausIntent;
pub use view::EbbinghausView;

#[cfg(test)]
pub(crate) use view::EbbinghausTestHandles;

#[cfg(test)]
mod intent_smoke;
