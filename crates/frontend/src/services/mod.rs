//! Service modules for backend interactions

pub mod backend;

pub use backend::HttpAuthBackend;
