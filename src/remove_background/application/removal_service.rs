use super::error::ApplicationError;
use image::ImageFormat;
use std::sync::Arc;

use crate::domain::chroma_key::ChromaKey;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::infrastructure::external_image_fetcher::DefaultExternalImageFetcher;
use crate::infrastructure::file_storage::LocalFileStorage;

pub struct RemovalService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
}

impl RemovalService {
    pub fn new(image_processor: Arc<dyn ImageProcessor + Send + Sync>) -> Self {
        Self { image_processor }
    }

    fn map_format_str_to_enum(&self, format_str: &str) -> (ImageFormat, &'static str) {
        match format_str.to_lowercase().as_str() {
            "jpeg" | "jpg" => (ImageFormat::Jpeg, "image/jpeg"),
            // PNG is the default: the only listed format that keeps the alpha channel.
            "png" | _ => (ImageFormat::Png, "image/png"),
        }
    }

    /// Keys the fixed green range out of `image_data` and returns the encoded
    /// result with its content type. The input format is guessed from the bytes.
    pub async fn remove_background(
        &self,
        image_data: Vec<u8>,
        output_format_str: String,
    ) -> Result<(Vec<u8>, &'static str), ApplicationError> {
        println!(
            "RemovalService: remove_background called with format: {}",
            output_format_str
        );

        let (output_format, content_type) = self.map_format_str_to_enum(&output_format_str);

        let processed = self.image_processor.remove_background(
            image_data,
            None,
            &ChromaKey::green(),
            output_format,
        )?;

        Ok((processed, content_type))
    }

    pub async fn remove_background_from_url(
        &self,
        image_url: String,
        output_format_str: String,
    ) -> Result<(Vec<u8>, &'static str), ApplicationError> {
        println!(
            "RemovalService: remove_background_from_url called for URL: {}",
            image_url
        );

        let image_fetcher = DefaultExternalImageFetcher::new();
        let image_data = image_fetcher.fetch_image_from_url(&image_url).await?;

        self.remove_background(image_data, output_format_str).await
    }

    /// File-to-file form: reads `input_path`, keys the green range, and writes
    /// the result to `output_path` in the format its extension names. Only PNG
    /// keeps the alpha channel; JPEG flattens it.
    pub async fn remove_background_file(
        &self,
        input_path: &str,
        output_path: &str,
    ) -> Result<(), ApplicationError> {
        let storage = LocalFileStorage::new();
        let image_data = storage.read_image(input_path).await?;

        let output_format = ImageFormat::from_path(output_path)
            .map_err(crate::infrastructure::error::InfrastructureError::ImageLibError)?;

        let processed = self.image_processor.remove_background(
            image_data,
            None,
            &ChromaKey::green(),
            output_format,
        )?;

        storage.save_image(output_path, &processed).await?;
        println!("Image saved to: {}", output_path);
        Ok(())
    }
}
