// Loading zone requests from disk
pub mod request;

// Re-export commonly used types
pub use request::ZoneRequest;
