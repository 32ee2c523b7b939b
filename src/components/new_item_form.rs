//! New Item Form Component
//!
//! Name input plus category select. Submission stays disabled until the
//! trimmed name is non-empty and a category is chosen.

use leptos::prelude::*;
use shoplist_core::CategoryId;

use crate::components::category_label;
use crate::context::use_shop;
use crate::store::AppStateStoreFields;

/// Form for adding items to the top of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let shop = use_shop();

    let (new_name, set_new_name) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let can_submit = move || !new_name.get().trim().is_empty() && !category.get().is_empty();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let category_id = category.get_untracked();
        if name.trim().is_empty() || category_id.is_empty() { return; }

        shop.add_item(name.trim(), CategoryId::from(category_id));
        set_new_name.set(String::new());
        set_category.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new item"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"Select category"</option>
                    <For
                        each=move || shop.state.categories().get()
                        key=|cat| cat.id.clone()
                        children=move |cat| {
                            view! { <option value=cat.id.to_string()>{category_label(&cat)}</option> }
                        }
                    />
                </select>
                <button type="submit" disabled=move || !can_submit()>"+ Add"</button>
            </div>
        </form>
    }
}
