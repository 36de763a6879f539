//! Boss head animation clock.

use arena_core::constants::Millis;

/// Loops the head through its frames at a fixed period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadAnimation {
    elapsed_ms: Millis,
    frame: u32,
}

impl HeadAnimation {
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Back to frame 0 with no elapsed time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance by `dt_ms` and return every frame entered, in order, paired
    /// with its offset in ms from the start of the step.
    pub fn advance(
        &mut self,
        dt_ms: Millis,
        period_ms: Millis,
        frame_count: u32,
    ) -> Vec<(Millis, u32)> {
        if period_ms == 0 || frame_count == 0 {
            return Vec::new();
        }
        let mut until_next = period_ms.saturating_sub(self.elapsed_ms);
        let mut consumed = 0;
        let mut entered = Vec::new();
        while dt_ms - consumed >= until_next {
            consumed += until_next;
            self.frame = (self.frame + 1) % frame_count;
            entered.push((consumed, self.frame));
            until_next = period_ms;
        }
        self.elapsed_ms = period_ms - until_next + (dt_ms - consumed);
        entered
    }
}
