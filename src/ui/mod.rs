pub mod async_data;
pub mod presenter;

pub use async_data::{AsyncData, DataState};
