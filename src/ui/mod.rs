mod editor;
mod help;
pub(crate) mod picker;
pub(crate) mod preview;
pub(crate) mod wheel;

pub use editor::render_editor;
pub use help::render_help;
pub use picker::render_picker;
