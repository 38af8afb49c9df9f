//! Shared harness for the integration suites: a shell wired to recording
//! effect handlers.

#![allow(dead_code)]

use gambit::engine::{BoardEngine, Square};
use gambit::game::GameEvent;
use gambit::shell::{GameShell, RenderProps, Renderer, TimerService};
use std::time::Duration;

/// Renderer that keeps every frame it is handed.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RenderProps>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, props: &RenderProps) {
        self.frames.push(props.clone());
    }
}

/// Timer that records arming and cancellation alongside the pending state.
#[derive(Debug, Default)]
pub struct RecordingTimer {
    pub pending: Option<Duration>,
    pub sets: usize,
    pub cancels: usize,
}

impl TimerService for RecordingTimer {
    fn set(&mut self, delay: Duration) {
        self.pending = Some(delay);
        self.sets += 1;
    }

    fn cancel(&mut self) {
        self.pending = None;
        self.cancels += 1;
    }
}

pub type TestShell = GameShell<BoardEngine, RecordingRenderer, RecordingTimer>;

/// A started shell at the initial position.
pub fn shell() -> TestShell {
    let mut shell = GameShell::new(
        BoardEngine::new(),
        RecordingRenderer::default(),
        RecordingTimer::default(),
    )
    .expect("the game machine definition builds");
    shell.start();
    shell
}

pub fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub fn click(shell: &mut TestShell, name: &str) {
    shell.process(GameEvent::Clicked(sq(name)));
}

/// Click the source square, then the destination square.
pub fn play(shell: &mut TestShell, from: &str, to: &str) {
    click(shell, from);
    click(shell, to);
}

/// White mates on the last pair.
pub const SCHOLARS_MATE: [(&str, &str); 7] = [
    ("e2", "e4"),
    ("e7", "e5"),
    ("d1", "h5"),
    ("b8", "c6"),
    ("f1", "c4"),
    ("g8", "f6"),
    ("h5", "f7"),
];
