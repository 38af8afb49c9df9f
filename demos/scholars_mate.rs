//! Plays a scholar's mate against the machine from the terminal, with a
//! clock tick per ply, a pause/resume round-trip, and an undo along the way.
//!
//! Run with `cargo run --example scholars_mate`.

use gambit::engine::{BoardEngine, ChessEngine, Square};
use gambit::game::GameEvent;
use gambit::shell::{GameShell, ManualTimer, TraceRenderer};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn main() -> Result<(), gambit::BuildError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut shell = GameShell::new(BoardEngine::new(), TraceRenderer, ManualTimer::default())?;
    shell.start();

    let moves = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("d1", "h5"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
        ("h5", "f7"),
    ];

    for (ply, (from, to)) in moves.iter().enumerate() {
        // The armed timer fires once per ply.
        if shell.timer_mut().fire().is_some() {
            shell.process(GameEvent::Tick);
        }

        // Think for a bit with the clock stopped before black's second move.
        if ply == 3 {
            shell.process(GameEvent::ClockClicked);
            shell.process(GameEvent::ClockClicked);
        }

        shell.process(GameEvent::Clicked(sq(from)));
        shell.process(GameEvent::Clicked(sq(to)));

        // Second thoughts about 2...Nc6: take it back and play it again.
        if ply == 3 {
            shell.process(GameEvent::Undo);
            shell.process(GameEvent::Clicked(sq(from)));
            shell.process(GameEvent::Clicked(sq(to)));
        }
    }

    println!("{}", shell.engine().ascii());
    println!(
        "{} after {} seconds on the clock",
        shell.machine().context().status,
        shell.machine().context().game_duration
    );

    Ok(())
}
