pub mod app;
pub mod compose;
pub mod events;
pub mod footer;
pub mod header;
pub mod inbox;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
