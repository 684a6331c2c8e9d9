mod chat;
mod config;
mod context;
mod outcome;
mod support;
