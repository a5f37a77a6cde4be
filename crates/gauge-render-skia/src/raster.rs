// File: crates/gauge-render-skia/src/raster.rs
// Summary: Headless PNG/RGBA rasterization of gauge display lists using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use gauge_core::{Color, DisplayList};
use skia_safe as skia;

use crate::{sk_color, SkiaRenderer};

pub struct RenderOptions {
    pub background: Color,
    /// Draw text commands; off gives font-independent pixels.
    pub draw_text: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::from_rgb(0x1a, 0x1a, 0x2e), // dark navy
            draw_text: true,
        }
    }
}

fn rasterize(list: &DisplayList, opts: &RenderOptions) -> Result<skia::Surface> {
    let (w, h) = (list.width as i32, list.height as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(sk_color(opts.background));
    SkiaRenderer::new().with_text(opts.draw_text).paint(canvas, list);
    log::debug!("rasterized {} commands onto {w}x{h}", list.len());
    Ok(surface)
}

/// Encode the display list as PNG bytes.
pub fn render_to_png_bytes(list: &DisplayList, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(list, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the display list to a PNG at `output_png_path`.
pub fn render_to_png(
    list: &DisplayList,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(list, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub fn render_to_rgba8(list: &DisplayList, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(list, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back {w}x{h} pixels failed");
    }
    Ok((pixels, w as u32, h as u32, stride))
}
