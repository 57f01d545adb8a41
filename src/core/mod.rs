pub mod color;
pub mod error;
pub mod extractor;
pub mod interaction;
pub mod loader;
pub mod pipeline;
