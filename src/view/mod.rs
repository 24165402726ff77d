//! View module - rendering the splitter into a softbuffer surface

pub mod frame;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use panesplit::model::{AppModel, HandleBar, HandleState, Rect, SplitDirection, PANEL_INSET};
use panesplit::theme::{Color, Theme};

pub use frame::Frame;

/// Length of the visible grip bar on an idle handle, in logical pixels
const BAR_LENGTH: f32 = 48.0;
/// Grip length while hovered or dragged
const BAR_LENGTH_ACTIVE: f32 = 64.0;
/// Thickness of the grip bar, in logical pixels
const BAR_THICKNESS: f32 = 4.0;
/// Height of the tinted strip at the top of each panel card
const ACCENT_STRIP: f32 = 6.0;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents between frames, so we
    /// draw into our own buffer and copy it over on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            surface
                .resize(width, height)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        Ok(Self {
            surface,
            back_buffer: vec![0; size.width as usize * size.height as usize],
            width: size.width,
            height: size.height,
        })
    }

    /// Draw the model and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = model.window_size;
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            // Minimized
            return Ok(());
        };

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer.resize(width as usize * height as usize, 0);
            self.surface
                .resize(nz_width, nz_height)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            draw_splitter(&mut frame, model);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

/// Draw panels and handles for the current widths
pub fn draw_splitter(frame: &mut Frame, model: &AppModel) {
    let theme = &model.theme;
    let scale = model.scale_factor as f32;

    frame.clear(theme.background.to_argb_u32());

    let layout = model.layout();

    for (index, (rect, panel)) in layout
        .panels
        .iter()
        .zip(model.splitter.panels())
        .enumerate()
    {
        let card = rect.inset(PANEL_INSET * scale);
        frame.draw_bordered_rect(
            card,
            theme.panel.background.to_argb_u32(),
            theme.panel.border.to_argb_u32(),
        );

        let accent = panel
            .color
            .as_deref()
            .and_then(|hex| match Color::from_hex(hex) {
                Ok(color) => Some(color),
                Err(e) => {
                    tracing::debug!("Ignoring color of panel {}: {}", panel.title, e);
                    None
                }
            })
            .or_else(|| theme.accent(index));
        if let Some(accent) = accent {
            let strip = Rect::new(
                card.x + 1.0,
                card.y + 1.0,
                (card.width - 2.0).max(0.0),
                (ACCENT_STRIP * scale).min(card.height),
            );
            frame.blend_rect(strip, tinted(accent));
        }
    }

    for handle in &layout.handles {
        draw_handle(
            frame,
            handle,
            model.splitter.handle_state(handle.index),
            theme,
            scale,
        );
    }
}

fn draw_handle(
    frame: &mut Frame,
    handle: &HandleBar,
    state: HandleState,
    theme: &Theme,
    scale: f32,
) {
    frame.fill_rect(handle.rect, theme.splitter.track.to_argb_u32());

    let length = match state {
        HandleState::Idle => BAR_LENGTH,
        HandleState::Hovered | HandleState::Active => BAR_LENGTH_ACTIVE,
    } * scale;
    let thickness = BAR_THICKNESS * scale;
    let rect = handle.rect;

    // Grip centered in the handle, running along the handle's long side
    let bar = match handle.direction {
        SplitDirection::Horizontal => {
            let w = thickness.min(rect.width);
            let h = length.min(rect.height);
            Rect::new(
                rect.x + (rect.width - w) / 2.0,
                rect.y + (rect.height - h) / 2.0,
                w,
                h,
            )
        }
        SplitDirection::Vertical => {
            let w = length.min(rect.width);
            let h = thickness.min(rect.height);
            Rect::new(
                rect.x + (rect.width - w) / 2.0,
                rect.y + (rect.height - h) / 2.0,
                w,
                h,
            )
        }
    };

    frame.fill_rect(bar, theme.splitter.bar_color(state).to_argb_u32());
}

/// Accent color at reduced opacity
fn tinted(color: Color) -> u32 {
    let alpha = if color.a == 0xFF { 0x60 } else { color.a };
    Color { a: alpha, ..color }.to_argb_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use panesplit::config::SplitterConfig;

    fn grip_center(model: &AppModel) -> (usize, usize) {
        let handle = model.layout().handles[0];
        let rect = handle.rect;
        (
            (rect.x + rect.width / 2.0) as usize,
            (rect.y + rect.height / 2.0) as usize,
        )
    }

    fn render_pixel(model: &AppModel, x: usize, y: usize) -> u32 {
        let (width, height) = model.window_size;
        let mut buffer = vec![0u32; width as usize * height as usize];
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        draw_splitter(&mut frame, model);
        frame.get_pixel(x, y)
    }

    #[test]
    fn test_grip_color_follows_handle_state() {
        let mut model = AppModel::new(SplitterConfig::default(), 400, 200);
        let (x, y) = grip_center(&model);

        assert_eq!(
            render_pixel(&model, x, y),
            model.theme.splitter.bar.to_argb_u32()
        );

        model.splitter.set_hovered(Some(0));
        assert_eq!(
            render_pixel(&model, x, y),
            model.theme.splitter.hover.to_argb_u32()
        );

        assert!(model.splitter.drag_begin(0));
        assert_eq!(
            render_pixel(&model, x, y),
            model.theme.splitter.active.to_argb_u32()
        );
    }

    #[test]
    fn test_window_corner_shows_background() {
        let model = AppModel::new(SplitterConfig::default(), 400, 200);
        assert_eq!(
            render_pixel(&model, 1, 1),
            model.theme.background.to_argb_u32()
        );
    }
}
