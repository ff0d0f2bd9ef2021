//! Terminal front end: prompts, the main menu and the help responder.

pub mod console;
pub mod help;
pub mod menu;

pub use console::Console;
pub use menu::{Command, Menu};
