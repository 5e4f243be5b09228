//! Gamma correction for LED duty cycles
//!
//! LEDs respond roughly linearly to duty cycle, while the eye does not.
//! The tables here map a linear 0-255 request onto the duty that looks
//! like that brightness. A 50% request (127) becomes duty 36.

/// Exponent the standard table was generated with
pub const STANDARD_EXPONENT: f32 = 2.8;

/// Standard gamma 2.8 table
#[rustfmt::skip]
pub const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5,
    5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10,
    10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16,
    17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25,
    25, 26, 27, 27, 28, 29, 29, 30, 31, 32, 32, 33, 34, 35, 35, 36,
    37, 38, 39, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 50,
    51, 52, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 66, 67, 68,
    69, 70, 72, 73, 74, 75, 77, 78, 79, 81, 82, 83, 85, 86, 87, 89,
    90, 92, 93, 95, 96, 98, 99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// Correct a duty value with the standard table
#[inline]
pub const fn gamma8(duty: u8) -> u8 {
    GAMMA8[duty as usize]
}

/// 256-entry duty correction lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable {
    lut: [u8; 256],
}

impl GammaTable {
    /// The standard gamma 2.8 curve
    pub const STANDARD: Self = Self { lut: GAMMA8 };

    /// Identity table, duty is emitted unchanged
    #[allow(clippy::cast_possible_truncation)]
    pub const fn linear() -> Self {
        let mut lut = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            lut[i] = i as u8;
            i += 1;
        }
        Self { lut }
    }

    /// Build a table for an arbitrary exponent
    ///
    /// End points are pinned to 0 and 255 whatever the exponent is, so off
    /// stays off and full stays full.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_exponent(exponent: f32) -> Self {
        let mut lut = [0u8; 256];
        for (i, slot) in lut.iter_mut().enumerate().take(255).skip(1) {
            let request = f32::from(i as u8) / 255.0;
            let value = libm::powf(request, exponent) * 255.0 + 0.5;
            *slot = libm::floorf(value.clamp(0.0, 255.0)) as u8;
        }
        lut[255] = 255;
        Self { lut }
    }

    /// Correct a linear duty request
    #[inline]
    pub const fn correct(&self, duty: u8) -> u8 {
        self.lut[duty as usize]
    }

    /// Raw lookup table
    pub const fn as_array(&self) -> &[u8; 256] {
        &self.lut
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
