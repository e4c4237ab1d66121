// Spring Animation
// Damped-spring interpolation for animating scalar values toward a moving target

use std::time::Duration;

/// Integration step used when advancing a spring (seconds)
const STEP_SECS: f32 = 1.0 / 240.0;

/// Physical parameters of a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may come to rest
    pub rest_delta: f32,
    /// Speed (units per second) below which the spring may come to rest
    pub rest_speed: f32,
}

impl Spring {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.5,
        }
    }

    /// Damping ratio: < 1 overshoots, >= 1 approaches without overshoot
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(500.0, 25.0)
    }
}

/// How a value reaches a new target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Jump straight to the target
    Instant,
    /// Animate with a spring, optionally starting after a delay
    Spring { spring: Spring, delay: Duration },
}

impl Motion {
    pub fn spring(spring: Spring) -> Self {
        Motion::Spring { spring, delay: Duration::ZERO }
    }

    pub fn delayed(spring: Spring, delay: Duration) -> Self {
        Motion::Spring { spring, delay }
    }
}

/// A scalar that follows its target according to a [`Motion`]
///
/// The first target a value receives is applied immediately, so nothing slides
/// in from zero when an element first appears.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    motion: Motion,
    position: f32,
    velocity: f32,
    target: f32,
    pending_delay: Duration,
    initialized: bool,
}

impl AnimatedValue {
    pub fn new(motion: Motion) -> Self {
        Self {
            motion,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            pending_delay: Duration::ZERO,
            initialized: false,
        }
    }

    /// Current (possibly mid-flight) value
    pub fn value(&self) -> f32 {
        self.position
    }

    /// Current value rounded to the nearest whole cell
    pub fn cells(&self) -> u16 {
        self.position.round().clamp(0.0, u16::MAX as f32) as u16
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Point the value at a new target
    /// Re-targeting to the current target is a no-op so in-flight motion is not restarted
    pub fn set_target(&mut self, target: f32) {
        if !self.initialized {
            self.snap_to(target);
            return;
        }
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }

        self.target = target;
        match self.motion {
            Motion::Instant => {
                self.position = target;
                self.velocity = 0.0;
            }
            Motion::Spring { delay, .. } => {
                self.pending_delay = delay;
            }
        }
    }

    /// Jump to a value with no animation
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.pending_delay = Duration::ZERO;
        self.initialized = true;
    }

    /// Start the value from `from` and animate toward `to`
    pub fn animate_from(&mut self, from: f32, to: f32) {
        self.snap_to(from);
        self.set_target(to);
    }

    /// Whether the value is resting on its target
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance the animation by `dt`; returns true while still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_settled() {
            return false;
        }

        let spring = match self.motion {
            Motion::Instant => {
                self.position = self.target;
                self.velocity = 0.0;
                return false;
            }
            Motion::Spring { spring, .. } => spring,
        };

        // Delay is consumed before any movement happens
        let mut dt = dt;
        if !self.pending_delay.is_zero() {
            if dt <= self.pending_delay {
                self.pending_delay -= dt;
                return true;
            }
            dt -= self.pending_delay;
            self.pending_delay = Duration::ZERO;
        }

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(STEP_SECS);
            let displacement = self.position - self.target;
            let force = -spring.stiffness * displacement - spring.damping * self.velocity;
            self.velocity += force / spring.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.position - self.target).abs() < spring.rest_delta
            && self.velocity.abs() < spring.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &mut AnimatedValue, total: Duration) {
        let frame = Duration::from_millis(16);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            value.tick(frame);
            elapsed += frame;
        }
    }

    #[test]
    fn test_first_target_snaps() {
        let mut value = AnimatedValue::new(Motion::spring(Spring::default()));
        value.set_target(12.0);
        assert_eq!(value.value(), 12.0);
        assert!(value.is_settled());
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut value = AnimatedValue::new(Motion::spring(Spring::new(500.0, 25.0)));
        value.set_target(0.0);
        value.set_target(30.0);

        value.tick(Duration::from_millis(16));
        assert!(value.value() > 0.0 && value.value() < 30.0);

        run(&mut value, Duration::from_secs(3));
        assert_eq!(value.value(), 30.0);
        assert!(value.is_settled());
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = Spring::new(500.0, 10.0);
        assert!(spring.damping_ratio() < 1.0);

        let mut value = AnimatedValue::new(Motion::spring(spring));
        value.set_target(0.0);
        value.set_target(10.0);

        let mut peak: f32 = 0.0;
        for _ in 0..60 {
            value.tick(Duration::from_millis(8));
            peak = peak.max(value.value());
        }
        assert!(peak > 10.0);
    }

    #[test]
    fn test_delay_holds_position() {
        let motion = Motion::delayed(Spring::default(), Duration::from_millis(200));
        let mut value = AnimatedValue::new(motion);
        value.set_target(14.0);
        value.set_target(9.0);

        value.tick(Duration::from_millis(150));
        assert_eq!(value.value(), 14.0);

        value.tick(Duration::from_millis(100));
        assert!(value.value() < 14.0);

        run(&mut value, Duration::from_secs(3));
        assert_eq!(value.value(), 9.0);
    }

    #[test]
    fn test_instant_motion_jumps() {
        let mut value = AnimatedValue::new(Motion::Instant);
        value.set_target(3.0);
        value.set_target(40.0);
        assert_eq!(value.value(), 40.0);
        assert!(!value.tick(Duration::from_millis(16)));
    }

    #[test]
    fn test_retarget_same_value_keeps_motion() {
        let mut value = AnimatedValue::new(Motion::spring(Spring::default()));
        value.set_target(0.0);
        value.set_target(20.0);
        value.tick(Duration::from_millis(32));
        let mid = value.value();

        value.set_target(20.0);
        assert_eq!(value.value(), mid);
        assert!(!value.is_settled());
    }

    #[test]
    fn test_animate_from() {
        let mut value = AnimatedValue::new(Motion::spring(Spring::new(300.0, 30.0)));
        value.animate_from(1.0, 0.0);
        assert_eq!(value.value(), 1.0);
        run(&mut value, Duration::from_secs(2));
        assert_eq!(value.value(), 0.0);
        assert_eq!(value.cells(), 0);
    }
}
