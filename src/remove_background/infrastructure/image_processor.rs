use super::error::InfrastructureError;
use crate::domain::chroma_key::ChromaKey;
use crate::domain::color::Hsv;
use crate::domain::image_processor_trait::ImageProcessor;
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::map::map_colors;
use std::io::Cursor;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

/// Binary mask over the keyed range: 255 where the pixel matches `key`,
/// 0 everywhere else. No anti-aliasing; the boundary is hard.
pub fn chroma_mask(image: &RgbImage, key: &ChromaKey) -> GrayImage {
    map_colors(image, |Rgb([r, g, b])| {
        if key.contains(Hsv::from_rgb(r, g, b)) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Recombines the original color channels with `alpha` as the fourth channel.
/// Both buffers must have the same dimensions.
pub fn merge_alpha(image: &RgbImage, alpha: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let Luma([a]) = *alpha.get_pixel(x, y);
        Rgba([r, g, b, a])
    })
}

impl ImageProcessor for DefaultImageProcessor {
    fn remove_background(
        &self,
        image_bytes: Vec<u8>,
        input_format: Option<ImageFormat>,
        key: &ChromaKey,
        output_format: ImageFormat,
    ) -> Result<Vec<u8>, InfrastructureError> {
        let reader = match input_format {
            Some(format) => image::io::Reader::with_format(Cursor::new(image_bytes), format),
            None => image::io::Reader::new(Cursor::new(image_bytes))
                .with_guessed_format()
                .map_err(InfrastructureError::IoError)?,
        };
        let rgb = reader
            .decode()
            .map_err(InfrastructureError::ImageLibError)?
            .to_rgb8();

        let mut alpha = chroma_mask(&rgb, key);
        // Keyed pixels become transparent, everything else opaque.
        image::imageops::invert(&mut alpha);
        let rgba = merge_alpha(&rgb, &alpha);

        let mut buffer = Cursor::new(Vec::new());
        if output_format == ImageFormat::Jpeg {
            // JPEG carries no alpha channel: flatten instead of failing.
            image::DynamicImage::ImageRgba8(rgba)
                .to_rgb8()
                .write_to(&mut buffer, output_format)
                .map_err(InfrastructureError::ImageLibError)?;
        } else {
            rgba.write_to(&mut buffer, output_format)
                .map_err(InfrastructureError::ImageLibError)?;
        }
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn png_bytes(image: &RgbImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn decode_rgba(bytes: &[u8]) -> RgbaImage {
        image::load_from_memory(bytes).unwrap().to_rgba8()
    }

    #[test]
    fn test_all_green_input_becomes_fully_transparent() {
        let input = RgbImage::from_pixel(4, 3, GREEN);
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), None, &ChromaKey::green(), ImageFormat::Png)
            .unwrap();

        let rgba = decode_rgba(&output);
        assert_eq!((rgba.width(), rgba.height()), (4, 3));
        for Rgba([r, g, b, a]) in rgba.pixels() {
            assert_eq!((*r, *g, *b), (0, 255, 0));
            assert_eq!(*a, 0);
        }
    }

    #[test]
    fn test_no_green_input_stays_fully_opaque() {
        let mut input = RgbImage::from_pixel(3, 2, RED);
        input.put_pixel(1, 0, Rgb([0, 0, 255]));
        input.put_pixel(2, 1, WHITE);
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), None, &ChromaKey::green(), ImageFormat::Png)
            .unwrap();

        let rgba = decode_rgba(&output);
        for (x, y, Rgba([r, g, b, a])) in rgba.enumerate_pixels() {
            let Rgb([er, eg, eb]) = *input.get_pixel(x, y);
            assert_eq!((*r, *g, *b), (er, eg, eb));
            assert_eq!(*a, 255);
        }
    }

    #[test]
    fn test_mixed_input_alpha_is_complement_of_range_test() {
        // Left half green-range, right half not: the boundary must be hard.
        let input = RgbImage::from_fn(4, 4, |x, _| if x < 2 { GREEN } else { RED });
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), None, &ChromaKey::green(), ImageFormat::Png)
            .unwrap();

        let rgba = decode_rgba(&output);
        for (x, _, Rgba([_, _, _, a])) in rgba.enumerate_pixels() {
            let expected = if x < 2 { 0 } else { 255 };
            assert_eq!(*a, expected);
        }
    }

    #[test]
    fn test_round_trip_preserves_dimensions_and_color_channels() {
        let input = RgbImage::from_fn(5, 7, |x, y| Rgb([x as u8 * 40, y as u8 * 30, 200]));
        let key = ChromaKey::green();
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), Some(ImageFormat::Png), &key, ImageFormat::Png)
            .unwrap();

        let rgba = decode_rgba(&output);
        assert_eq!((rgba.width(), rgba.height()), (5, 7));

        let mut expected_alpha = chroma_mask(&input, &key);
        image::imageops::invert(&mut expected_alpha);
        for (x, y, Rgba([r, g, b, a])) in rgba.enumerate_pixels() {
            let Rgb([er, eg, eb]) = *input.get_pixel(x, y);
            assert_eq!((*r, *g, *b), (er, eg, eb));
            assert_eq!(*a, expected_alpha.get_pixel(x, y)[0]);
        }
    }

    #[test]
    fn test_end_to_end_two_by_two() {
        // [(green), (green), (white), (black)] -> alpha [0, 0, 255, 255].
        let mut input = RgbImage::new(2, 2);
        input.put_pixel(0, 0, GREEN);
        input.put_pixel(1, 0, GREEN);
        input.put_pixel(0, 1, WHITE);
        input.put_pixel(1, 1, BLACK);
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), None, &ChromaKey::green(), ImageFormat::Png)
            .unwrap();

        let rgba = decode_rgba(&output);
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([0, 255, 0, 0]));
        assert_eq!(rgba.get_pixel(1, 0), &Rgba([0, 255, 0, 0]));
        assert_eq!(rgba.get_pixel(0, 1), &Rgba([255, 255, 255, 255]));
        assert_eq!(rgba.get_pixel(1, 1), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_jpeg_output_flattens_alpha() {
        let input = RgbImage::from_pixel(2, 2, GREEN);
        let processor = DefaultImageProcessor::new();

        let output = processor
            .remove_background(png_bytes(&input), None, &ChromaKey::green(), ImageFormat::Jpeg)
            .unwrap();

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!(decoded.color().channel_count(), 3);
    }

    #[test]
    fn test_invalid_image_data_is_rejected() {
        let processor = DefaultImageProcessor::new();
        let result = processor.remove_background(
            vec![1, 2, 3, 4],
            None,
            &ChromaKey::green(),
            ImageFormat::Png,
        );
        assert!(matches!(
            result,
            Err(InfrastructureError::ImageLibError(_)) | Err(InfrastructureError::IoError(_))
        ));
    }

    #[test]
    fn test_chroma_mask_is_binary() {
        let input = RgbImage::from_fn(3, 1, |x, _| match x {
            0 => GREEN,
            1 => Rgb([0, 177, 64]),
            _ => RED,
        });
        let mask = chroma_mask(&input, &ChromaKey::green());
        assert_eq!(mask.get_pixel(0, 0)[0], 255);
        assert_eq!(mask.get_pixel(1, 0)[0], 255);
        assert_eq!(mask.get_pixel(2, 0)[0], 0);
    }
}
