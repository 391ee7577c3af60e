mod add;
mod compare;
mod errors;
mod feedback;
mod init;
mod list;
mod picks;
mod recommend;
mod search_stats;
mod support;
