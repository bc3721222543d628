pub mod engine;
pub mod format;
pub mod handlers;
pub mod legacy;
pub mod narrative;
