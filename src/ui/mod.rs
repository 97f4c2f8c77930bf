//! Console front end: text rendering of the board, line prompts and the
//! interactive session with its replay menu.

mod app;
pub mod board_view;
pub mod console;

pub use app::App;
