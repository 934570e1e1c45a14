//! Page rendering
//!
//! Pure (post list -> markup) rendering for the chronicles page.

pub mod renderer;

pub use renderer::{render_page, render_posts};
