//! Delete Confirm Button Component
//!
//! Delete button that asks for confirmation in a modal dialog.

use leptos::prelude::*;

/// Delete button with a confirmation dialog
///
/// # Arguments
/// * `button_class` - CSS class for the trigger button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_open, set_confirm_open) = signal(false);

    view! {
        <button
            class=button_class
            title="Delete"
            on:click=move |ev| {
                ev.stop_propagation();
                set_confirm_open.set(true);
            }
        >
            "🗑"
        </button>
        <Show when=move || confirm_open.get()>
            <div class="modal-backdrop" on:click=move |_| set_confirm_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Confirm deletion?"</h2>
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| set_confirm_open.set(false)>
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn"
                            on:click=move |_| {
                                // close first: confirming unmounts this row
                                set_confirm_open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
