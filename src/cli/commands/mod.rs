pub mod config;
pub mod init;
pub mod log;
pub mod search;
pub mod shell;
pub mod theme;
