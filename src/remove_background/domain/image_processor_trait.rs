use crate::domain::chroma_key::ChromaKey;
use crate::infrastructure::error::InfrastructureError;
use image::ImageFormat;

/// The seam between the application layer and the concrete pixel pipeline.
/// Takes encoded bytes in, returns encoded bytes out; the caller never sees
/// the intermediate buffers.
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    /// Decodes `image_bytes` (guessing the format when `input_format` is
    /// `None`), makes every pixel inside `key` transparent, and re-encodes
    /// as `output_format`.
    fn remove_background(
        &self,
        image_bytes: Vec<u8>,
        input_format: Option<ImageFormat>,
        key: &ChromaKey,
        output_format: ImageFormat,
    ) -> Result<Vec<u8>, InfrastructureError>;
}
