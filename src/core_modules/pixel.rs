// THEORY:
// The `Pixel` module is the most fundamental unit of the pixel path. It is a
// "dumb" data container for a single RGBA pixel plus the single-pixel color
// transforms the skin classifier needs. Anything that requires a neighbor in
// space (masking, segmentation) belongs in the higher modules.
//
// What lives here (by design):
// - Raw channels (RGBA) and their normalized (0..1 sRGB) forms, cached at
//   construction so the hot classification loop never divides per call.
// - The HSV transform in the units the skin thresholds are written in:
//   hue as an angle in degrees [0, 360), saturation and value as percentages
//   [0, 100]. An achromatic pixel reports hue 0 and saturation 0.
//
// Key principles:
// 1) Single-pixel scope: heuristics never read neighbors or history.
// 2) One unit system: every consumer of HSV sees degrees and percent. The
//    thresholds in `skin_mask` are written against exactly these ranges.

pub mod pixel {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type NormalizedChannel = f32;
    /// Hue angle in degrees [0, 360).
    pub type Hue = f32;
    /// HSV saturation in percent [0, 100].
    pub type Saturation = f32;
    /// HSV value in percent [0, 100].
    pub type Value = f32;

    const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
        /// The red channel value (0.0-1.0).
        pub red_normalized: NormalizedChannel,
        /// The green channel value (0.0-1.0).
        pub green_normalized: NormalizedChannel,
        /// The blue channel value (0.0-1.0).
        pub blue_normalized: NormalizedChannel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
                red_normalized: red as NormalizedChannel / 255.0,
                green_normalized: green as NormalizedChannel / 255.0,
                blue_normalized: blue as NormalizedChannel / 255.0,
            }
        }

        /// Hue angle in degrees [0, 360).
        ///
        /// - Uses normalized sRGB channels, no linearization.
        /// - Achromatic pixels (chroma ~0) report 0.0.
        pub fn hue(&self) -> Hue {
            let maximum_channel = self
                .red_normalized
                .max(self.green_normalized.max(self.blue_normalized));
            let minimum_channel = self
                .red_normalized
                .min(self.green_normalized.min(self.blue_normalized));
            let chroma = maximum_channel - minimum_channel;

            if chroma <= 1e-6 {
                return 0.0;
            }

            let inverse_chroma = 1.0 / chroma;

            let (base_difference, sector_offset) = if maximum_channel == self.red_normalized {
                (self.green_normalized - self.blue_normalized, 0.0)
            } else if maximum_channel == self.green_normalized {
                (self.blue_normalized - self.red_normalized, 2.0)
            } else {
                (self.red_normalized - self.green_normalized, 4.0)
            };

            let mut hue_degrees = (base_difference * inverse_chroma + sector_offset) * 60.0;
            if hue_degrees < 0.0 {
                hue_degrees += 360.0;
            }
            hue_degrees
        }

        /// HSV saturation in percent [0, 100]: chroma relative to value.
        pub fn saturation(&self) -> Saturation {
            let maximum_channel = self
                .red_normalized
                .max(self.green_normalized.max(self.blue_normalized));
            if maximum_channel <= 1e-6 {
                return 0.0;
            }
            let minimum_channel = self
                .red_normalized
                .min(self.green_normalized.min(self.blue_normalized));
            (maximum_channel - minimum_channel) / maximum_channel * 100.0
        }

        /// HSV value in percent [0, 100]: the brightest channel.
        pub fn value(&self) -> Value {
            self.red_normalized
                .max(self.green_normalized.max(self.blue_normalized))
                * 100.0
        }

        /// The full HSV triple in (degrees, percent, percent).
        pub fn hsv(&self) -> (Hue, Saturation, Value) {
            (self.hue(), self.saturation(), self.value())
        }
    }

    impl From<&[u8]> for Pixel {
        /// Builds a pixel from the leading RGBA bytes of a buffer slice.
        fn from(bytes: &[u8]) -> Self {
            if bytes.len() < CHANNELS {
                return Pixel::default();
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::Pixel;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.5,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn pure_red_is_hue_zero_full_saturation_full_value() {
        let (h, s, v) = Pixel::new(255, 0, 0, 255).hsv();
        assert_close(h, 0.0);
        assert_close(s, 100.0);
        assert_close(v, 100.0);
    }

    #[test]
    fn pure_green_is_hue_120() {
        let (h, s, v) = Pixel::new(0, 255, 0, 255).hsv();
        assert_close(h, 120.0);
        assert_close(s, 100.0);
        assert_close(v, 100.0);
    }

    #[test]
    fn pure_blue_is_hue_240() {
        assert_close(Pixel::new(0, 0, 255, 255).hue(), 240.0);
    }

    #[test]
    fn white_is_achromatic_full_value() {
        let (h, s, v) = Pixel::new(255, 255, 255, 255).hsv();
        assert_close(h, 0.0);
        assert_close(s, 0.0);
        assert_close(v, 100.0);
    }

    #[test]
    fn black_is_zero_value_zero_saturation() {
        let (_, s, v) = Pixel::new(0, 0, 0, 255).hsv();
        assert_close(s, 0.0);
        assert_close(v, 0.0);
    }

    #[test]
    fn skin_tone_lands_in_the_warm_low_hue_band() {
        let (h, s, v) = Pixel::new(230, 180, 170, 255).hsv();
        assert_close(h, 10.0);
        assert_close(s, 26.0);
        assert_close(v, 90.2);
    }

    #[test]
    fn from_bytes_reads_rgba_order() {
        let pixel = Pixel::from(&[10u8, 20, 30, 40][..]);
        assert_eq!(
            (pixel.red, pixel.green, pixel.blue, pixel.alpha),
            (10, 20, 30, 40)
        );
    }
}
