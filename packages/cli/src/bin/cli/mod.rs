pub mod auth;
pub mod generate;
pub mod guest;
pub mod history;
pub mod settings;
pub mod shell;
pub mod theme;
pub mod utils;
