//! Linear range mapping.

/// Map `x` from `[from_low, from_high]` onto `[to_low, to_high]`.
///
/// Purely linear — values outside the source range extrapolate rather
/// than clamp; callers that need a bounded result clamp afterwards.
pub fn map_range(x: f32, from_low: f32, from_high: f32, to_low: f32, to_high: f32) -> f32 {
    to_low + (x - from_low) * (to_high - to_low) / (from_high - from_low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        assert_eq!(map_range(0.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 0.0, 100.0), 100.0);
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn maps_onto_inverted_ranges() {
        assert_eq!(map_range(2.5, 0.0, 10.0, 100.0, 0.0), 75.0);
    }

    #[test]
    fn extrapolates_outside_the_source_range() {
        assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
    }
}
