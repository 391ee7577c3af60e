//! CLI commands for ecorec

pub mod add;
pub mod compare;
pub mod dispatch;
pub mod duplicates;
pub mod feedback;
pub mod format;
pub mod init;
pub mod list;
pub mod picks;
pub mod recommend;
pub mod search;
pub mod stats;
