// SPDX-License-Identifier: MPL-2.0
//! Account avatar images.
//!
//! Avatars arrive from the account backend as encoded image bytes. They are
//! decoded, center-cropped to a square, and masked to a circle once on
//! ingest; toolbar rendering then only converts the stored RGBA buffer into
//! an image handle.

use crate::error::{Error, Result};
use iced::widget::image::Handle;

/// A decoded, circular-masked avatar.
#[derive(Clone, PartialEq, Eq)]
pub struct Avatar {
    rgba: Vec<u8>,
    size: u32,
}

impl std::fmt::Debug for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Avatar").field("size", &self.size).finish()
    }
}

impl Avatar {
    /// Decodes encoded image bytes (PNG, JPEG, ...) into a circular avatar.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image_rs::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = image.dimensions();
        Self::from_rgba(image.into_raw(), width, height)
    }

    /// Builds a circular avatar from a raw RGBA buffer.
    ///
    /// Non-square input is center-cropped to the smaller dimension first.
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(Error::Image(format!(
                "avatar buffer length {} does not match {}x{}",
                rgba.len(),
                width,
                height
            )));
        }
        if width == 0 || height == 0 {
            return Err(Error::Image("empty avatar image".into()));
        }

        let size = width.min(height);
        let x_off = (width - size) / 2;
        let y_off = (height - size) / 2;

        let mut square = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            let row = ((y + y_off) * width + x_off) as usize * 4;
            square.extend_from_slice(&rgba[row..row + size as usize * 4]);
        }

        mask_circle(&mut square, size);
        Ok(Self { rgba: square, size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Image handle for rendering in the toolbar.
    pub fn handle(&self) -> Handle {
        Handle::from_rgba(self.size, self.size, self.rgba.clone())
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y * self.size + x) as usize * 4;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }
}

/// Zeroes the alpha of every pixel outside the inscribed circle.
fn mask_circle(rgba: &mut [u8], size: u32) {
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if dx * dx + dy * dy > radius * radius {
                let idx = (y * size + x) as usize * 4;
                rgba[idx..idx + 4].copy_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: u32, height: u32) -> Vec<u8> {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            rgba.extend_from_slice(&[10, 20, 30, 255]);
        }
        rgba
    }

    #[test]
    fn corners_become_transparent() {
        let avatar = Avatar::from_rgba(solid_rgba(16, 16), 16, 16).expect("avatar");
        assert_eq!(avatar.pixel(0, 0)[3], 0, "corner should be masked out");
        assert_eq!(avatar.pixel(8, 8)[3], 255, "center should stay opaque");
    }

    #[test]
    fn non_square_input_is_center_cropped() {
        let avatar = Avatar::from_rgba(solid_rgba(32, 16), 32, 16).expect("avatar");
        assert_eq!(avatar.size(), 16);
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let err = Avatar::from_rgba(vec![0; 10], 4, 4);
        assert!(err.is_err());
    }

    #[test]
    fn empty_image_is_rejected() {
        let err = Avatar::from_rgba(Vec::new(), 0, 0);
        assert!(err.is_err());
    }
}
