//! Drop Zone Component
//!
//! A horizontal line drop zone between rows for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Drop zone shown in the gap before row `gap` while dragging
#[component]
pub fn DropZone(
    dnd: DndSignals,
    /// Gap index (0 = above the first row)
    gap: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_gap_mouseenter(dnd, gap);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Gap(g)) if g == gap);
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
