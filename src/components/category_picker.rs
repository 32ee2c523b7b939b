//! Category Picker Component
//!
//! Category chip on a product row with a popover to reassign the item.

use leptos::prelude::*;
use shoplist_core::{find_by_id, Category, CategoryId, ItemId};

use crate::context::use_shop;
use crate::store::AppStateStoreFields;

/// Label for a category; seeded categories have no name, so fall back to the id
pub fn category_label(cat: &Category) -> String {
    if cat.name.trim().is_empty() {
        format!("Category {}", cat.id)
    } else {
        cat.name.clone()
    }
}

/// Chip showing the item's category; click to pick another
///
/// An id that does not resolve renders as "Unknown category".
#[component]
pub fn CategoryPicker(item_id: ItemId, category_id: CategoryId) -> impl IntoView {
    let shop = use_shop();
    let (open, set_open) = signal(false);

    let current_id = category_id.clone();
    let current = move || {
        shop.state.categories().with(|cats| find_by_id(cats, &current_id).cloned())
    };

    view! {
        <div class="category-picker" on:mouseleave=move |_| set_open.set(false)>
            <span
                class="category-chip"
                title="Click to change category"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || match current() {
                    Some(cat) => view! {
                        <span class=format!("category-dot {}", cat.dot_color())></span>
                        {category_label(&cat)}
                    }.into_any(),
                    None => view! {
                        <span class="category-dot unknown"></span>
                        "Unknown category"
                    }.into_any(),
                }}
            </span>

            <Show when=move || open.get()>
                <div class="category-popover">
                    <For
                        each=move || shop.state.categories().get()
                        key=|cat| cat.id.clone()
                        children={
                            let item_id = item_id.clone();
                            let category_id = category_id.clone();
                            move |cat: Category| {
                                let item_id = item_id.clone();
                                let is_current = cat.id == category_id;
                                let option_class = if is_current { "category-option current" } else { "category-option" };
                                let target = cat.id.clone();
                                view! {
                                    <div
                                        class=option_class
                                        on:click=move |_| {
                                            set_open.set(false);
                                            shop.update_item_category(&item_id, target.clone());
                                        }
                                    >
                                        <span class=format!("category-dot {}", cat.dot_color())></span>
                                        <span>{category_label(&cat)}</span>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
