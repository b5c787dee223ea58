pub mod chroma_key;
pub mod color;
pub mod error;
pub mod image_processor_trait;
