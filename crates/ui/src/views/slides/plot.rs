use dioxus::prelude::*;
use memory_core::games::curves::PlotFrame;

/// Axes and labels shared by the curve plots; curves go in `children`.
#[component]
pub(crate) fn PlotSvg(width: f64, height: f64, axes: String, children: Element) -> Element {
    let frame = PlotFrame::new(width, height);
    let memory = frame.memory_label_at();
    let time = frame.time_label_at();

    rsx! {
        svg {
            class: "plot",
            view_box: "0 0 {width} {height}",
            polyline { class: "plot-axes", points: "{axes}", fill: "none" }
            text { class: "plot-label", x: "{memory.x}", y: "{memory.y}", "Memory" }
            text { class: "plot-label", x: "{time.x}", y: "{time.y}", "Time" }
            {children}
        }
    }
}
