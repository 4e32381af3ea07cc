use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::input::KeyOutcome;
use super::{App, Context, DemoWindow};

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }

        if self.context.is_none() {
            match Context::new(event_loop.owned_display_handle()) {
                Ok(ctx) => self.context = Some(ctx),
                Err(err) => {
                    self.fail(
                        event_loop,
                        anyhow::anyhow!("failed to create rendering context: {err}"),
                    );
                    return;
                }
            }
        }
        let Some(context) = self.context.as_ref() else {
            return;
        };

        match DemoWindow::new(event_loop, context, &self.config) {
            Ok(win) => {
                win.window.request_redraw();
                self.window = Some(win);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        if win.window.id() != window_id {
            return;
        }
        let mut should_redraw = false;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    win.on_focus_lost();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.on_cursor_moved(position);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                win.on_mouse_input(state, button);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                match win.on_key(&event.logical_key, event.state) {
                    KeyOutcome::Redraw => should_redraw = true,
                    KeyOutcome::Exit => event_loop.exit(),
                    KeyOutcome::Ignored => {}
                }
            }
            WindowEvent::Resized(_) => {
                should_redraw = true;
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = win.redraw() {
                    self.fail(event_loop, err);
                    return;
                }
            }
            _ => (),
        }
        if should_redraw {
            win.window.request_redraw();
        }
    }
}
