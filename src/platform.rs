//! # Platform Services (stubs)
//!
//! Fixed-contract placeholders for services the runtime asks the platform
//! for. Each returns its pinned baseline value until a real backend (RTC,
//! hardware RNG, cycle counter) is substituted; callers must tolerate the
//! pinned values, and the unit tests pin them on purpose.

/// Seed for the runtime's PRNG. No entropy source is wired up yet.
pub fn entropy_seed() -> i32 {
    0
}

/// Current wall-clock timestamp in milliseconds. No RTC backend yet.
pub fn timestamp() -> f64 {
    0.0
}

/// Accept a wall-clock adjustment from the runtime. Ignored.
pub fn timestamp_update(millis: f64) -> i32 {
    let _ = millis;
    0
}

/// Initialize the uptime counter. No-op until a cycle counter backs it.
pub fn uptime_init() {}

/// Microseconds since [`uptime_init`]. Pinned to zero.
pub fn uptime_micro() -> u32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stubs_are_pinned() {
        assert_eq!(entropy_seed(), 0);
        assert_eq!(timestamp(), 0.0);
        assert_eq!(timestamp_update(1234.5), 0);
        uptime_init();
        assert_eq!(uptime_micro(), 0);
    }
}
