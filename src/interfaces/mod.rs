//! Interface layer — transport adapters over the application services.

pub mod http;
