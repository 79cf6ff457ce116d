pub mod connection;
pub mod kv;
