//! Shopping List App
//!
//! Main application component: theme toggle, add form, product list.

use leptos::prelude::*;
use shoplist_core::{ListSummary, Theme};

use crate::components::{NewItemForm, ProductList, ThemeToggle};
use crate::context::ShopContext;
use crate::store::AppStateStoreFields;

/// Set or clear the `dark` class on `<html>`
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force(Theme::Dark.as_str(), theme.is_dark());
}

#[component]
pub fn App() -> impl IntoView {
    // Store is rehydrated once here and shared with every component
    let shop = ShopContext::new();
    provide_context(shop);

    Effect::new(move |_| {
        let theme = Theme::from_dark_mode(shop.state.is_dark_mode().get());
        log::debug!("[APP] theme {}", theme.as_str());
        apply_theme_class(theme);
    });

    let summary = move || {
        let summary = shop.state.items().with(|items| ListSummary::of(items));
        format!(
            "{} items, {} purchased, {} left",
            summary.total,
            summary.purchased,
            summary.remaining()
        )
    };

    view! {
        <div class="app-layout">
            <ThemeToggle />

            <main class="main-content">
                <h1>"Shopping List"</h1>

                <Show when=move || shop.save_failed.get()>
                    <p class="save-warning">
                        "Changes could not be saved on this device and will be lost on reload."
                    </p>
                </Show>

                <NewItemForm />

                <ProductList />

                <p class="item-count">{summary}</p>
            </main>
        </div>
    }
}
