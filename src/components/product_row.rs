//! Product Row Component
//!
//! Individual item in the product list.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals, DropTarget};
use shoplist_core::{find_by_id, Item};

use crate::components::{CategoryPicker, DeleteConfirmButton};
use crate::context::use_shop;
use crate::store::AppStateStoreFields;

/// A single product row: grip, checkbox, name, category and delete
#[component]
pub fn ProductRow(
    item: Item,
    /// Position in the display projection
    index: usize,
    dnd: DndSignals,
) -> impl IntoView {
    let shop = use_shop();

    let purchased = item.purchased;
    let category_id = item.category_id.clone();
    let lookup_id = category_id.clone();
    let category_color = move || {
        shop.state.categories().with(|cats| find_by_id(cats, &lookup_id).map(|cat| cat.color.clone()))
    };

    let row_class = move || {
        let mut c = String::from("product-row");
        match category_color() {
            Some(color) => { c.push(' '); c.push_str(&color); }
            None => c.push_str(" category-missing"),
        }
        if purchased { c.push_str(" purchased"); }
        if dnd.dragging_read.get() == Some(index) { c.push_str(" dragging"); }
        if matches!(dnd.drop_target_read.get(), Some(DropTarget::Row(t)) if t == index) {
            c.push_str(" drop-target");
        }
        c
    };

    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();
    let on_delete = Callback::new(move |_| shop.delete_item(&delete_id));

    view! {
        <div class=row_class>
            <span class="grip" title="Drag to reorder" on:mousedown=make_on_mousedown(dnd, index)>
                "⋮⋮"
            </span>
            <input
                type="checkbox"
                checked=purchased
                on:change=move |_| shop.toggle_item(&toggle_id)
            />
            <span class="product-name">{item.name.clone()}</span>
            <CategoryPicker item_id=item.id.clone() category_id=category_id />
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </div>
    }
}
