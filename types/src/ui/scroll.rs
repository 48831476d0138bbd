//! The smooth-scroll glide effect.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_out_cubic};

/// An in-flight eased scroll from one offset to another.
#[derive(Debug, Clone)]
pub struct ScrollEffect {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

impl ScrollEffect {
    #[must_use]
    pub fn new(from: u16, to: u16, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Current interpolated offset.
    #[must_use]
    pub fn position(&self) -> u16 {
        match self.timer.phase() {
            AnimPhase::Completed => self.to,
            AnimPhase::Running { progress } => {
                let from = f32::from(self.from);
                let to = f32::from(self.to);
                let pos = from + (to - from) * ease_out_cubic(progress);
                pos.round().max(0.0) as u16
            }
        }
    }

    #[must_use]
    pub fn target(&self) -> u16 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollEffect;
    use std::time::Duration;

    #[test]
    fn starts_at_origin_and_lands_on_target() {
        let mut effect = ScrollEffect::new(0, 40, Duration::from_millis(100));
        assert_eq!(effect.position(), 0);
        effect.advance(Duration::from_millis(200));
        assert!(effect.is_finished());
        assert_eq!(effect.position(), 40);
    }

    #[test]
    fn glides_monotonically_toward_target() {
        let mut effect = ScrollEffect::new(10, 50, Duration::from_millis(100));
        let mut last = effect.position();
        for _ in 0..10 {
            effect.advance(Duration::from_millis(10));
            let pos = effect.position();
            assert!(pos >= last);
            last = pos;
        }
        assert_eq!(last, 50);
    }

    #[test]
    fn scrolling_up_works_too() {
        let mut effect = ScrollEffect::new(50, 10, Duration::from_millis(50));
        effect.advance(Duration::from_millis(25));
        let mid = effect.position();
        assert!(mid < 50 && mid >= 10);
        effect.advance(Duration::from_millis(50));
        assert_eq!(effect.position(), 10);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let effect = ScrollEffect::new(0, 30, Duration::ZERO);
        assert!(effect.is_finished());
        assert_eq!(effect.position(), 30);
    }
}
