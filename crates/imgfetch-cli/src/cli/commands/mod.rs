//! CLI command handlers. Each mode is in its own file.

mod batch;
mod interactive;
mod menu;
mod sample;

pub use batch::run_batch_cmd;
pub use interactive::run_interactive;
pub use menu::choose_from_menu;
pub use sample::run_sample;
