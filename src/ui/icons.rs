// SPDX-License-Identifier: MPL-2.0
//! Palette-aware toolbar icons.
//!
//! Icon sources are monochrome SVGs embedded at compile time. An icon is
//! requested by its logical path (e.g. `"account.svg"`) together with the
//! current color scheme; the SVG is rasterized with `resvg` and tinted with
//! the scheme's primary text color, so the same logical path yields a dark
//! glyph on light themes and a light glyph on dark themes. Toolbar actions
//! store their logical path and are re-rendered through this module whenever
//! the theme changes.

use crate::ui::design_tokens::sizing;
use crate::ui::theming::ColorScheme;
use iced::widget::image::Handle;
use iced::Color;
use resvg::usvg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct Asset;

/// Logical icon paths used by the settings window.
pub mod paths {
    pub const ACCOUNT: &str = "account.svg";
    pub const LOGOUT: &str = "logout.svg";
    pub const SETTINGS: &str = "settings.svg";
    pub const NETWORK: &str = "network.svg";
}

/// Renders the icon at `icon_path` tinted for the given scheme, at the
/// toolbar icon size.
///
/// Missing or unparsable sources degrade to a translucent placeholder block
/// rather than failing; the toolbar never loses a button over a bad asset.
pub fn color_aware(icon_path: &str, scheme: &ColorScheme) -> Handle {
    render(icon_path, scheme.text_primary, u32::from(sizing::TOOLBAR_ICON))
}

/// Renders the icon at an arbitrary pixel size with an explicit tint color.
pub fn render(icon_path: &str, color: Color, size: u32) -> Handle {
    match rasterize(icon_path, size) {
        Some(pixmap) => {
            let tinted = tint(pixmap.data(), color);
            Handle::from_rgba(size, size, tinted)
        }
        None => placeholder(color, size),
    }
}

/// Rasterizes an embedded SVG to a square pixmap.
fn rasterize(icon_path: &str, size: u32) -> Option<tiny_skia::Pixmap> {
    let source = Asset::get(icon_path)?;
    let tree = usvg::Tree::from_data(source.data.as_ref(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Replaces every pixel's color with `color` while keeping the rendered
/// alpha, producing a flat tint of the glyph shape.
fn tint(rgba: &[u8], color: Color) -> Vec<u8> {
    let [r, g, b, _] = color.into_rgba8();
    let mut out = Vec::with_capacity(rgba.len());
    for pixel in rgba.chunks_exact(4) {
        let alpha = pixel[3];
        if alpha == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            out.extend_from_slice(&[r, g, b, alpha]);
        }
    }
    out
}

/// Fallback glyph: a semi-transparent square in the tint color.
fn placeholder(color: Color, size: u32) -> Handle {
    let [r, g, b, _] = color.into_rgba8();
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        pixels.extend_from_slice(&[r, g, b, 96]);
    }
    Handle::from_rgba(size, size, pixels)
}
