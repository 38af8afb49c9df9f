//! Control states of the chess UI machine.

use crate::state_enum;

state_enum! {
    /// The machine's control-state hierarchy.
    ///
    /// `GameOn` nests a turn composite per color, each with a plays/selected
    /// pair of leaves. The clock states sit outside `GameOn`; re-entry goes
    /// through deep history so the gameplay position survives clock
    /// round-trips. `Off` is where the machine waits for `START`; `GameOver`
    /// is terminal.
    pub enum GameState {
        Off,
        GameOn,
        WhiteTurn,
        WhitePlays,
        WhitePieceSelected,
        BlackTurn,
        BlackPlays,
        BlackPieceSelected,
        UpdatingClock,
        PausedClock,
        GameOver,
    }
    parents: {
        WhiteTurn => GameOn,
        BlackTurn => GameOn,
        WhitePlays => WhiteTurn,
        WhitePieceSelected => WhiteTurn,
        BlackPlays => BlackTurn,
        BlackPieceSelected => BlackTurn,
    }
    final: [GameOver]
}
