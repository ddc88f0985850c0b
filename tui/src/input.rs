//! Input handling for the Swoon TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use swoon_engine::{App, Phase};

use crate::HitMap;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    /// Whether the pointer was over the decline button on the previous
    /// motion event. Relocation fires on the rising edge only; a pointer
    /// resting inside the button must not retrigger every subsequent event.
    pointer_on_no: bool,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            pointer_on_no: false,
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first to ensure the input thread unblocks if it
        // is currently backpressured on a send (e.g., during a motion burst).
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(std::time::Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events, so drag bursts keep their ordering while memory
                    // stays bounded.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

pub fn handle_events(app: &mut App, input: &mut InputPump, hits: &mut HitMap) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev, hits, &mut input.pointer_on_no) {
            return Ok(true);
        }
        processed += 1;
    }
    if processed == MAX_EVENTS_PER_FRAME {
        debug!(processed, "Input backlog: deferring remaining events to next frame");
    }
    Ok(app.should_quit())
}

fn apply_event(app: &mut App, event: Event, hits: &mut HitMap, pointer_on_no: &mut bool) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            // Handle Ctrl+C globally
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }

            match app.phase() {
                Phase::Asking => handle_asking_keys(app, hits, key),
                Phase::Accepted => handle_accepted_keys(app, key),
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, hits, pointer_on_no, mouse),
        _ => {}
    }
    app.should_quit()
}

fn handle_asking_keys(app: &mut App, hits: &HitMap, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            app.accept();
        }
        KeyCode::Char('n' | 'N') => {
            let (region, control) = hits.measurements();
            app.evade(region, control);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
        }
        _ => {}
    }
}

fn handle_accepted_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r' | 'R') | KeyCode::Enter => {
            app.reset();
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, hits: &mut HitMap, pointer_on_no: &mut bool, mouse: MouseEvent) {
    let at = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let on_yes = app.phase() == Phase::Asking && hits.over_yes(at);
            hits.set_hover_yes(on_yes);

            let on_no = app.phase() == Phase::Asking && hits.over_no(at);
            if on_no && !*pointer_on_no {
                let (region, control) = hits.measurements();
                app.evade(region, control);
            }
            *pointer_on_no = on_no;
        }
        MouseEventKind::Down(MouseButton::Left) => match app.phase() {
            // The decline button draws on top, so it wins overlapping clicks.
            Phase::Asking if hits.over_no(at) => {
                let (region, control) = hits.measurements();
                app.evade(region, control);
            }
            Phase::Asking if hits.over_yes(at) => app.accept(),
            Phase::Accepted if hits.over_reset(at) => app.reset(),
            _ => {}
        },
        _ => {}
    }
}
