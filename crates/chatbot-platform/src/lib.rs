//! Browser adapters for the chatbot core.
//!
//! `FetchHttp` sends provider requests through `fetch()`; the storage module
//! persists settings in `localStorage` with an in-memory fallback.

pub mod http;
pub mod storage;

#[cfg(test)]
mod tests;
