use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorIcon, Window};

use panesplit::commands::{Cmd, CursorStyle};
use panesplit::config::SplitterConfig;
use panesplit::messages::{AppMsg, Msg, SplitterMsg};
use panesplit::model::AppModel;
use panesplit::update::{update, window_title};

use crate::view::Renderer;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    /// Owns the display connection the surface draws through
    #[allow(dead_code)]
    context: Option<Context<Rc<Window>>>,
    /// Initial logical window size
    initial_size: (u32, u32),
    msg_rx: Receiver<Msg>,
    /// Fatal error that ended the event loop
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(window_width: u32, window_height: u32, config: SplitterConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();

        let mut model = AppModel::new(config, window_width, window_height);

        // Width reports come back through the update loop like any other message
        model.splitter.set_on_resize(move |widths| {
            let _ = msg_tx.send(Msg::App(AppMsg::PanelsResized(widths.to_vec())));
        });

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            initial_size: (window_width, window_height),
            msg_rx,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(window_title(self.model.splitter.widths()))
            .with_inner_size(LogicalSize::new(self.initial_size.0, self.initial_size.1));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        for msg in [
            Msg::App(AppMsg::ScaleFactorChanged(scale_factor)),
            Msg::App(AppMsg::Resize(size.width, size.height)),
        ] {
            update(&mut self.model, msg);
        }

        tracing::info!(
            width = size.width,
            height = size.height,
            scale_factor,
            "Window created"
        );

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::CursorMoved { position, .. } => update(
                &mut self.model,
                Msg::Splitter(SplitterMsg::PointerMoved {
                    x: position.x,
                    y: position.y,
                }),
            ),
            WindowEvent::CursorLeft { .. } => {
                update(&mut self.model, Msg::Splitter(SplitterMsg::PointerLeft))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let (x, y) = self.model.pointer?;
                    update(
                        &mut self.model,
                        Msg::Splitter(SplitterMsg::PointerDown { x, y }),
                    )
                }
                ElementState::Released => {
                    update(&mut self.model, Msg::Splitter(SplitterMsg::PointerUp))
                }
            },
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => {
                        update(&mut self.model, Msg::Splitter(SplitterMsg::EndDrag))
                    }
                    PhysicalKey::Code(KeyCode::KeyR) if !event.repeat => {
                        update(&mut self.model, Msg::Splitter(SplitterMsg::Reset))
                    }
                    _ => None,
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {:#}", e);
                }
                None
            }
            _ => None,
        }
    }

    /// Drain messages sent from the resize callback.
    /// Returns true if any of them needs a redraw.
    fn process_pending_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                needs_redraw |= cmd.needs_redraw();
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::SetCursor(style) => {
                if let Some(window) = &self.window {
                    window.set_cursor(cursor_icon(style));
                }
            }
            Cmd::SetTitle(title) => {
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

fn cursor_icon(style: CursorStyle) -> CursorIcon {
    match style {
        CursorStyle::Default => CursorIcon::Default,
        CursorStyle::ColResize => CursorIcon::ColResize,
        CursorStyle::RowResize => CursorIcon::RowResize,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to open window: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.process_pending_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
