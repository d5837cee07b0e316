//! Command handlers for the Keyrank CLI

pub mod keywords;

pub use keywords::{handle_pick_command, handle_rank_command, handle_render_command};
