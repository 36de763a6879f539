//! Which frame a boss piece shows for a given player position.

use arena_core::enums::FacingFrame;
use arena_core::types::Bounds;

/// Frame for a piece inside `bounds` tracking a player at `player_x`.
///
/// A player left of the boss gets the look-left frame, right of it the
/// look-right frame, anywhere in between the look-down frame. Mirrored
/// sprites swap the left/right frames so the drawn eye still points at the
/// player.
pub fn facing_frame(bounds: &Bounds, player_x: f32, flipped: bool) -> FacingFrame {
    if player_x < bounds.left() {
        if flipped {
            FacingFrame::LookRight
        } else {
            FacingFrame::LookLeft
        }
    } else if player_x > bounds.right() {
        if flipped {
            FacingFrame::LookLeft
        } else {
            FacingFrame::LookRight
        }
    } else {
        FacingFrame::LookDown
    }
}
