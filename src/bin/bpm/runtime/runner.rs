use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::ui::render_app;

use super::controller::AppController;
use super::events::{AppEvent, InputEvent};
use super::terminal::AppTerminal;

const TICK_MS: u64 = 120;

pub async fn run_app(
    controller: AppController,
    terminal: &mut AppTerminal,
    rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
) -> anyhow::Result<()> {
    let mut runner = AppRunner::new(controller, terminal, rx, event_tx);
    runner.run().await
}

struct AppRunner<'a> {
    controller: AppController,
    terminal: &'a mut AppTerminal,
    rx: mpsc::Receiver<AppEvent>,
    tick: tokio::time::Interval,
    dirty: bool,
}

impl<'a> AppRunner<'a> {
    fn new(
        controller: AppController,
        terminal: &'a mut AppTerminal,
        rx: mpsc::Receiver<AppEvent>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_reader(event_tx);
        Self {
            controller,
            terminal,
            rx,
            tick: tokio::time::interval(Duration::from_millis(TICK_MS)),
            dirty: true,
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        self.controller.start();
        while !self.controller.state.should_quit {
            if self.dirty {
                self.draw()?;
                self.dirty = false;
            }
            self.wait_for_event().await;
        }
        Ok(())
    }

    async fn wait_for_event(&mut self) {
        let event = tokio::select! {
            Some(event) = self.rx.recv() => event,
            _ = self.tick.tick() => AppEvent::Tick,
        };
        if self.controller.handle_event(event).await {
            self.dirty = true;
        }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        self.terminal
            .draw(|frame| render_app(frame, &self.controller.state))?;
        Ok(())
    }
}

fn spawn_event_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(ev) => ev,
            Err(_) => continue,
        };
        let mapped = match event {
            Event::Key(key) => Some(InputEvent::Key(key)),
            Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
            _ => None,
        };
        if let Some(input) = mapped {
            if sender.blocking_send(AppEvent::Input(input)).is_err() {
                break;
            }
        }
    });
}
