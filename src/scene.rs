//! Rendering a scene description to pixels.
//!
//! Both modes produce the same image for the same scene. Buffer mode rasterizes
//! at world resolution through direct writes and presents the result scaled;
//! renderer mode rasterizes straight to screen resolution with one rectangle call
//! per position.

use crate::config::{RenderMode, SceneConfig};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::render::Canvas;

/// Render counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Segments processed.
    pub segments: usize,
    /// Positions emitted across all segments.
    pub positions: usize,
}

/// Render `config` to a screen-resolution framebuffer.
///
/// # Errors
///
/// Returns the scene's validation error, or the first segment error (out of
/// bounds, or degenerate under the reject policy). Segments are not clipped.
pub fn render(config: &SceneConfig) -> Result<Framebuffer> {
    render_with_stats(config).map(|(fb, _)| fb)
}

/// [`render`], also returning counters.
///
/// # Errors
///
/// See [`render`].
pub fn render_with_stats(config: &SceneConfig) -> Result<(Framebuffer, RenderStats)> {
    config.validate()?;

    let (fb, stats) = match config.mode {
        RenderMode::Buffer => render_buffer(config)?,
        RenderMode::Renderer => render_renderer(config)?,
    };

    log::debug!(
        "rendered {} segments ({} positions) in {:?} mode to {}x{}",
        stats.segments,
        stats.positions,
        config.mode,
        fb.width(),
        fb.height()
    );
    Ok((fb, stats))
}

fn render_buffer(config: &SceneConfig) -> Result<(Framebuffer, RenderStats)> {
    let view = config.view_transform()?;
    let rasterizer = config.rasterizer();
    let mut stats = RenderStats::default();

    let mut world = Framebuffer::new(config.world.width, config.world.height)?;
    world.clear(config.background());
    {
        let mut sink = world.sink(config.background());
        for seg in &config.segments {
            sink.set_color(seg.color());
            stats.positions += rasterizer.rasterize(seg.segment(), &mut sink)?;
            stats.segments += 1;
        }
    }

    let (w, h) = config.screen_size()?;
    let mut screen = Framebuffer::new(w, h)?;
    screen.clear(config.background());
    world.present_scaled(&view, &mut screen);

    Ok((screen, stats))
}

fn render_renderer(config: &SceneConfig) -> Result<(Framebuffer, RenderStats)> {
    let view = config.view_transform()?;
    let rasterizer = config.rasterizer();
    let mut stats = RenderStats::default();

    let (w, h) = config.screen_size()?;
    let mut canvas = Canvas::new(w, h)?;
    canvas.set_draw_color(config.background());
    canvas.clear();

    // The screen may be larger than the world, so check world space too
    let world = Rect::new(0, 0, config.world.width, config.world.height);
    for seg in &config.segments {
        let area = seg.segment().bounds();
        if !world.contains_rect(&area) {
            return Err(Error::OutOfBounds {
                area,
                bounds: world,
            });
        }

        canvas.set_draw_color(seg.color());
        stats.positions += rasterizer.rasterize_scaled(seg.segment(), &view, &mut canvas.sink())?;
        stats.segments += 1;
    }

    Ok((canvas.into_framebuffer(), stats))
}
