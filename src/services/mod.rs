pub mod command_runner;
pub mod layout_controller;
pub mod lock_screen;
pub mod setxkbmap;
pub mod status_loop;
pub mod xkblayout_state;

pub use command_runner::create_command_runner;
pub use layout_controller::LayoutController;
pub use lock_screen::LockScreen;
pub use status_loop::StatusLoop;
