// THEORY:
// The `skin_mask` module performs the crucial first step of the pixel path:
// transforming a raw frame buffer into a binary map of skin-colored pixels.
// This slicing of the frame into skin/not-skin is the bridge between raw image
// data and the region analysis that follows. The mask is transient: it is
// derived once per input frame and discarded after contour extraction.
//
// Key architectural principles:
// 1.  **One Threshold Scale**: The skin band is expressed entirely in the HSV
//     units the `Pixel` heuristics produce: hue in degrees, saturation and
//     value in percent. The bounds are named constants, not inline literals.
// 2.  **Flat Storage**: One bool per pixel, indexed `y * width + x`, the same
//     flattened addressing the flood fill uses. Memory stays O(pixel count).
// 3.  **Debug Rendering**: `to_rgba` renders the mask white-on-black at full
//     opacity, and `save_snapshot` encodes that rendering as a PNG so a
//     misbehaving threshold can be inspected against the source frame.

use crate::core_modules::pixel::pixel::Pixel;
use image::ImageEncoder;

/// Hue band (degrees) accepted as skin.
pub const SKIN_HUE_MIN: f32 = 0.0;
pub const SKIN_HUE_MAX: f32 = 20.0;
/// Saturation band (percent) accepted as skin.
pub const SKIN_SATURATION_MIN: f32 = 20.0;
pub const SKIN_SATURATION_MAX: f32 = 100.0;
/// Value band (percent) accepted as skin.
pub const SKIN_VALUE_MIN: f32 = 70.0;
pub const SKIN_VALUE_MAX: f32 = 100.0;

/// True when the pixel's HSV triple falls inside the skin band.
pub fn is_skin_pixel(pixel: &Pixel) -> bool {
    let (hue, saturation, value) = pixel.hsv();
    (SKIN_HUE_MIN..=SKIN_HUE_MAX).contains(&hue)
        && (SKIN_SATURATION_MIN..=SKIN_SATURATION_MAX).contains(&saturation)
        && (SKIN_VALUE_MIN..=SKIN_VALUE_MAX).contains(&value)
}

/// A binary same-dimension map of which frame pixels are skin-colored.
#[derive(Debug, Clone)]
pub struct SkinMask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl SkinMask {
    /// Classifies a raw RGBA frame buffer (4 bytes per pixel, row-major).
    /// Truncated buffers leave the missing tail classified as not-skin.
    pub fn from_rgba(frame_buffer: &[u8], width: u32, height: u32) -> Self {
        let mut data = vec![false; (width * height) as usize];
        for (index, is_skin) in data.iter_mut().enumerate() {
            let byte_index = index * 4;
            if byte_index + 3 < frame_buffer.len() {
                let pixel = Pixel::from(&frame_buffer[byte_index..byte_index + 4]);
                *is_skin = is_skin_pixel(&pixel);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Classifies a raw RGB frame buffer (3 bytes per pixel, row-major).
    pub fn from_rgb(frame_buffer: &[u8], width: u32, height: u32) -> Self {
        let mut data = vec![false; (width * height) as usize];
        for (index, is_skin) in data.iter_mut().enumerate() {
            let byte_index = index * 3;
            if byte_index + 2 < frame_buffer.len() {
                let pixel = Pixel::new(
                    frame_buffer[byte_index],
                    frame_buffer[byte_index + 1],
                    frame_buffer[byte_index + 2],
                    255,
                );
                *is_skin = is_skin_pixel(&pixel);
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Builds a mask directly from per-pixel bits. Rejects size mismatches by
    /// truncating or padding with not-skin; intended for synthetic inputs.
    pub fn from_bits(bits: Vec<bool>, width: u32, height: u32) -> Self {
        let mut data = bits;
        data.resize((width * height) as usize, false);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flattened index of a coordinate, the addressing shared with flood fill.
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn is_skin(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)]
    }

    pub fn skin_pixel_count(&self) -> usize {
        self.data.iter().filter(|&&bit| bit).count()
    }

    /// Renders the mask as a fully-opaque white-on-black RGBA buffer.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.data.len() * 4);
        for &is_skin in &self.data {
            let tone = if is_skin { 255 } else { 0 };
            buffer.extend_from_slice(&[tone, tone, tone, 255]);
        }
        buffer
    }

    /// Writes the debug rendering to a PNG file.
    pub fn save_snapshot(&self, name: &str) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(name)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        encoder.write_image(
            &self.to_rgba(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKIN: [u8; 4] = [230, 180, 170, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const DARK: [u8; 4] = [40, 30, 28, 255];

    fn frame_of(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    #[test]
    fn classifies_skin_against_background() {
        let frame = frame_of(&[SKIN, BLUE, DARK, SKIN]);
        let mask = SkinMask::from_rgba(&frame, 2, 2);
        assert!(mask.is_skin(0, 0));
        assert!(!mask.is_skin(1, 0));
        assert!(!mask.is_skin(0, 1));
        assert!(mask.is_skin(1, 1));
        assert_eq!(mask.skin_pixel_count(), 2);
    }

    #[test]
    fn washed_out_pixel_fails_the_saturation_floor() {
        // Near-white warm pixel: hue in band, value high, saturation under 20.
        let frame = frame_of(&[[250, 240, 235, 255]]);
        let mask = SkinMask::from_rgba(&frame, 1, 1);
        assert!(!mask.is_skin(0, 0));
    }

    #[test]
    fn dim_pixel_fails_the_value_floor() {
        // Same chromaticity as skin but at a third of the brightness.
        let frame = frame_of(&[[76, 60, 56, 255]]);
        let mask = SkinMask::from_rgba(&frame, 1, 1);
        assert!(!mask.is_skin(0, 0));
    }

    #[test]
    fn cool_hue_is_rejected() {
        // Saturated bright yellow-green: saturation and value pass, hue does not.
        let frame = frame_of(&[[180, 230, 90, 255]]);
        let mask = SkinMask::from_rgba(&frame, 1, 1);
        assert!(!mask.is_skin(0, 0));
    }

    #[test]
    fn rgb_and_rgba_buffers_classify_alike() {
        let rgba = frame_of(&[SKIN, BLUE]);
        let rgb: Vec<u8> = [230u8, 180, 170, 0, 0, 255].to_vec();
        let from_rgba = SkinMask::from_rgba(&rgba, 2, 1);
        let from_rgb = SkinMask::from_rgb(&rgb, 2, 1);
        assert_eq!(from_rgba.is_skin(0, 0), from_rgb.is_skin(0, 0));
        assert_eq!(from_rgba.is_skin(1, 0), from_rgb.is_skin(1, 0));
    }

    #[test]
    fn debug_rendering_is_opaque_white_on_black() {
        let frame = frame_of(&[SKIN, BLUE]);
        let mask = SkinMask::from_rgba(&frame, 2, 1);
        let rendered = mask.to_rgba();
        assert_eq!(&rendered[0..4], &[255, 255, 255, 255]);
        assert_eq!(&rendered[4..8], &[0, 0, 0, 255]);
    }
}
