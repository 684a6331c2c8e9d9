mod error;
mod query;
mod transport;
