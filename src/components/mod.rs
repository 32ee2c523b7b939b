//! UI Components
//!
//! Reusable Leptos components.

mod category_picker;
mod delete_confirm_button;
mod drop_zone;
mod new_item_form;
mod product_list;
mod product_row;
mod theme_toggle;

pub use category_picker::{category_label, CategoryPicker};
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use new_item_form::NewItemForm;
pub use product_list::ProductList;
pub use product_row::ProductRow;
pub use theme_toggle::ThemeToggle;
