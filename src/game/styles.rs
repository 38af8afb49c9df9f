//! Square styling helpers.

use super::context::{SquareStyle, SquareStyles};
use crate::engine::Square;

const SELECTED_BACKGROUND: &str = "rgba(255, 255, 0, 0.4)";

/// Style map highlighting the currently selected piece square.
pub fn selected_square_styles(square: Square) -> SquareStyles {
    let mut styles = SquareStyles::new();
    styles.insert(
        square,
        SquareStyle {
            background_color: SELECTED_BACKGROUND.to_string(),
        },
    );
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_selected_square_is_styled() {
        let square: Square = "d4".parse().unwrap();
        let styles = selected_square_styles(square);

        assert_eq!(styles.len(), 1);
        assert_eq!(
            styles.get(&square).map(|s| s.background_color.as_str()),
            Some(SELECTED_BACKGROUND)
        );
    }
}
