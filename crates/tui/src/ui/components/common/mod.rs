pub mod json_syntax;
pub mod scroll;
pub mod scrollbar;

pub use json_syntax::highlight_json;
pub use scroll::ScrollState;
pub use scrollbar::render_vertical_scrollbar;
