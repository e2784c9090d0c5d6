use std::path::PathBuf;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{
        msg::{review::ReviewMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, ExportOptions},
    },
    infrastructure::{
        config::Config,
        tui::{Event, Frame, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and renders after each change.
///
/// The terminal is injected so tests can run against `TestTui`.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    resize_rx: mpsc::UnboundedReceiver<(u16, u16)>,
}

impl<T: TuiLike> AppRunner<T> {
    /// Create a runner that opens `input` as soon as it starts
    pub fn new(config: Config, input: PathBuf, export: ExportOptions, tui: T) -> Self {
        let initial_state = AppState::new(config, export);
        let mut runtime = Runtime::new(initial_state);
        let (resize_tx, resize_rx) = mpsc::unbounded_channel();
        runtime.add_resize_sender(resize_tx);
        runtime.send_msg(Msg::Review(ReviewMsg::Open(input)));

        Self {
            runtime,
            tui,
            components: Components::new(),
            resize_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Run the main loop until quit is requested or the event source ends
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.run_update_cycle();
        self.render()?;

        while let Some(event) = self.tui.next().await {
            let mut needs_render = true;
            match event {
                Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
                Event::Tick => {
                    self.runtime.send_raw_msg(RawMsg::Tick);
                    needs_render = false;
                }
                Event::Render => {}
                Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                Event::Error => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("terminal input error".to_string())),
                Event::Init
                | Event::FocusGained
                | Event::FocusLost
                | Event::Paste(_)
                | Event::Mouse(_) => needs_render = false,
            }

            self.runtime.run_update_cycle();

            // Handle host-side effects requested by commands
            while let Ok((w, h)) = self.resize_rx.try_recv() {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                needs_render = true;
            }

            if self.runtime.state().system.should_suspend {
                self.tui.suspend()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.runtime.run_update_cycle();
                self.tui.resume()?;
                needs_render = true;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if needs_render {
                self.render()?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Draw the current state. A changed scroll limit is queued so the next
    /// scroll key is checked against what is actually on screen.
    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut max_scroll = None;
        self.tui.draw(&mut |f: &mut Frame<'_>| {
            max_scroll = components.render(f, state);
        })?;

        if let Some(limit) = max_scroll {
            if state.ui.max_scroll != Some(limit) {
                self.runtime.send_msg(Msg::Ui(UiMsg::SetScrollLimit(limit)));
            }
        }
        Ok(())
    }
}
