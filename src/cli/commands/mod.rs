pub mod config;
pub mod export;
pub mod grid;
pub mod history;
pub mod init;
pub mod next;
pub mod session;
pub mod staff;
