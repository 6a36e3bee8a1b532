pub mod board;
pub mod config;
pub mod game;
pub mod output;
pub mod scoring;
pub mod session;
pub mod share;
pub mod shuffle;
pub mod tui;
