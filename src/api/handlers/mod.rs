mod files;
mod meta;
mod ui;

pub use files::{create_file, get_file, list_files};
pub use meta::{health, limits};
pub use ui::{index, script, styles};
