//! Renders dynamic values as nested HTML tables.
//!
//! [`classify`] picks a layout for one value, [`render`] walks the whole tree
//! into a [`Node`](tabledump_api::Node) and [`html`] turns that into markup.

pub mod classify;
pub mod config;
pub mod error;
pub mod html;
pub mod render;

pub use classify::{classify, column_keys, Classified};
pub use config::RenderOptions;
pub use error::RenderError;
pub use html::{to_html, write_html};
pub use render::{render, render_document, render_html, render_with};
