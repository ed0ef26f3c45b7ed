//! Infrastructure layer — persistence backends.

pub mod database;
pub mod storage;
