use memory_core::navigation::Navigator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotVm {
    pub index: usize,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemVm {
    pub index: usize,
    pub label: String,
    pub current: bool,
}

/// Navigation bar, progress bar and slide menu.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckChromeVm {
    pub current: usize,
    pub position_label: String,
    pub progress_width: String,
    pub dots: Vec<DotVm>,
    pub menu_open: bool,
    pub menu_items: Vec<MenuItemVm>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[must_use]
pub fn map_deck_chrome(navigator: &Navigator) -> DeckChromeVm {
    let current = navigator.current();
    DeckChromeVm {
        current,
        position_label: navigator.position_label(),
        progress_width: format!("{:.2}%", navigator.progress_percent()),
        dots: navigator
            .dots()
            .into_iter()
            .enumerate()
            .map(|(index, active)| DotVm { index, active })
            .collect(),
        menu_open: navigator.menu_open(),
        menu_items: navigator
            .outline()
            .slides()
            .iter()
            .enumerate()
            .map(|(index, slide)| MenuItemVm {
                index,
                label: slide.menu_label(),
                current: index == current,
            })
            .collect(),
        previous_disabled: navigator.is_first(),
        next_disabled: navigator.is_last(),
    }
}
