mod convert;
mod themes;

pub use convert::{handle_convert_command, resolve_options};
pub use themes::handle_themes_command;
