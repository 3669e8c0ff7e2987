//! Count-up math for the animated stats. Pure functions so the displayed
//! sequence is reproducible for any elapsed-time schedule.

/// Total run time of a count-up, in milliseconds.
pub const COUNT_UP_DURATION_MS: f64 = 1500.0;

/// Cubic ease-out: fast start, decelerating toward the target.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// A parsed stat literal. Integers carry their non-digit suffix ("10+");
/// decimals render with exactly one fractional digit and no suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Count { target: u32, suffix: String },
    Decimal { target: f64 },
}

impl StatValue {
    /// Parses a stat literal. Returns `None` when the literal contains no
    /// usable number, so callers can fall back to showing it verbatim.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.contains('.') {
            return raw.trim().parse::<f64>().ok().map(|target| StatValue::Decimal { target });
        }
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix: String = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
        digits
            .parse::<u32>()
            .ok()
            .map(|target| StatValue::Count { target, suffix })
    }

    /// The displayed string after `elapsed_ms` of animation. Monotonic in
    /// `elapsed_ms` and clamped at the target once the duration is reached.
    pub fn render_at(&self, elapsed_ms: f64) -> String {
        let progress = (elapsed_ms / COUNT_UP_DURATION_MS).clamp(0.0, 1.0);
        let eased = ease_out_cubic(progress);
        match self {
            StatValue::Count { target, suffix } => {
                let current = (eased * f64::from(*target)).floor() as u32;
                format!("{current}{suffix}")
            }
            StatValue::Decimal { target } => format!("{:.1}", eased * target),
        }
    }

    pub fn final_display(&self) -> String {
        self.render_at(COUNT_UP_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_with_suffix() {
        assert_eq!(
            StatValue::parse("10+"),
            Some(StatValue::Count { target: 10, suffix: "+".to_string() })
        );
        assert_eq!(
            StatValue::parse("2"),
            Some(StatValue::Count { target: 2, suffix: String::new() })
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(StatValue::parse("3.6"), Some(StatValue::Decimal { target: 3.6 }));
    }

    #[test]
    fn test_parse_rejects_literals_without_a_number() {
        assert_eq!(StatValue::parse(""), None);
        assert_eq!(StatValue::parse("+"), None);
        assert_eq!(StatValue::parse("N/A"), None);
    }

    #[test]
    fn test_count_up_schedule_for_ten_plus() {
        let stat = StatValue::parse("10+").unwrap();
        // floor(10 * (1 - (1 - p)^3)) at quarter-duration steps
        assert_eq!(stat.render_at(0.0), "0+");
        assert_eq!(stat.render_at(375.0), "5+");
        assert_eq!(stat.render_at(750.0), "8+");
        assert_eq!(stat.render_at(1125.0), "9+");
        assert_eq!(stat.render_at(1500.0), "10+");
    }

    #[test]
    fn test_count_up_is_monotonic() {
        let stat = StatValue::parse("10+").unwrap();
        let mut last = 0u32;
        for step in 0..=100 {
            let shown = stat.render_at(f64::from(step) * 15.0);
            let current: u32 = shown.trim_end_matches('+').parse().unwrap();
            assert!(current >= last, "display went backwards at step {step}");
            last = current;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn test_decimal_lands_exactly_on_target() {
        let stat = StatValue::parse("3.6").unwrap();
        assert_eq!(stat.render_at(1500.0), "3.6");
        // clamped past the duration
        assert_eq!(stat.render_at(10_000.0), "3.6");
        assert_eq!(stat.final_display(), "3.6");
    }

    #[test]
    fn test_decimal_keeps_one_fractional_digit_throughout() {
        let stat = StatValue::parse("3.6").unwrap();
        for step in 0..=10 {
            let shown = stat.render_at(f64::from(step) * 150.0);
            let (_, frac) = shown.split_once('.').expect("missing fractional digit");
            assert_eq!(frac.len(), 1, "unexpected precision in {shown}");
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
