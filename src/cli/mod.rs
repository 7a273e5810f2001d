//! Console presentation layer: the numbered main menu and the interactive session loop.

pub mod menu;
pub mod session;

pub use menu::{render_menu, Command, MenuError};
pub use session::Session;
