//! Product List Component
//!
//! Renders the display projection with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropZones between rows.

use leptos::prelude::*;
use leptos_dragdrop::*;
use shoplist_core::display_order_owned;

use crate::components::{DropZone, ProductRow};
use crate::context::use_shop;
use crate::store::AppStateStoreFields;

/// Product list with DnD support
#[component]
pub fn ProductList() -> impl IntoView {
    let shop = use_shop();

    let dnd = create_dnd_signals();

    // A finished drag moves one element within the projection
    bind_global_mouseup(dnd, move |dragged, target| {
        let len = shop.state.items().with_untracked(|items| items.len());
        let Some(to) = target.destination(dragged, len) else {
            return;
        };
        log::debug!("[DND] move row {} -> {} ({:?})", dragged, to, target);
        shop.move_item(dragged, to);
    });

    let rows = move || {
        shop.state
            .items()
            .with(|items| display_order_owned(items))
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="product-list">
            <DropZone dnd=dnd gap=0 />

            <For
                each=rows
                key=|(index, item)| {
                    // Index is part of the key: rows capture their position for DnD
                    (
                        *index,
                        item.id.clone(),
                        item.name.clone(),
                        item.category_id.clone(),
                        item.purchased,
                    )
                }
                children=move |(index, item)| {
                    view! {
                        <div
                            class="product-row-wrapper"
                            on:mouseenter=make_on_row_mouseenter(dnd, index)
                            on:mouseleave=make_on_mouseleave(dnd)
                        >
                            <ProductRow item=item index=index dnd=dnd />
                        </div>

                        <DropZone dnd=dnd gap=index + 1 />
                    }
                }
            />

            <Show when=move || shop.state.items().with(|items| items.is_empty())>
                <p class="empty-list">"Nothing on the list yet."</p>
            </Show>
        </div>
    }
}
