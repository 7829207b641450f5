mod ebbinghaus_vm;
mod games_vm;
mod nav_vm;

pub use ebbinghaus_vm::{
    BarsVm, ChoiceVm, CompareVm, EbbinghausVm, PlotMarkerVm, PlotVm, RevealVm, RoundVm,
    StepIndicatorVm, map_ebbinghaus,
};
pub use games_vm::{opacity_style, path_data, ring_background};
pub use nav_vm::{DeckChromeVm, DotVm, MenuItemVm, map_deck_chrome};
