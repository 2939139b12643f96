pub mod filter_selector;
pub mod gallery_view;
pub mod header;
pub mod image_grid;
pub mod image_modal;
pub mod loader;
pub mod prompt_form;
