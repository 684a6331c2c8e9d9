mod ask;
mod config;
mod key;
