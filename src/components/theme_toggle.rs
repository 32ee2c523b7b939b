//! Theme Toggle Component

use leptos::prelude::*;
use shoplist_core::Theme;

use crate::context::use_shop;
use crate::store::AppStateStoreFields;

/// Sun/moon button flipping the dark-mode flag
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let shop = use_shop();
    let theme = move || Theme::from_dark_mode(shop.state.is_dark_mode().get());

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            title=move || format!("Switch to {} theme", theme().toggled().as_str())
            on:click=move |_| shop.toggle_theme()
        >
            {move || if theme().is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
