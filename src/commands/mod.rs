//! CLI commands

pub mod init;
pub mod render;
pub mod show;
