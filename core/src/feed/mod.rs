//! Feed module
//!
//! HTML rendering of the news feed.

pub mod renderer;

pub use renderer::{
    category_label, escape, render_entry, render_entry_list, render_latest, render_tabs,
};
