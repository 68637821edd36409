//! Fill-level banding for the sidebar capacity bars.

/// One of five fixed fill-level ranges, used to pick the capacity bar's
/// color class. Each band is closed at its upper bound: 20 percent is still
/// `CriticallyLow`, 100 percent is `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBand {
    /// 0-20 percent full.
    CriticallyLow,
    /// 20-40 percent full.
    Low,
    /// 40-60 percent full.
    Moderate,
    /// 60-80 percent full.
    High,
    /// 80-100 percent full.
    Full,
    /// Anything outside 0-100, or not a finite number. Rendered unstyled.
    OutOfRange,
}

impl FillBand {
    /// Classify a `percfull` value into its band.
    pub fn classify(percent_full: f64) -> Self {
        if !percent_full.is_finite() || percent_full < 0.0 || percent_full > 100.0 {
            return FillBand::OutOfRange;
        }
        if percent_full <= 20.0 {
            FillBand::CriticallyLow
        } else if percent_full <= 40.0 {
            FillBand::Low
        } else if percent_full <= 60.0 {
            FillBand::Moderate
        } else if percent_full <= 80.0 {
            FillBand::High
        } else {
            FillBand::Full
        }
    }

    /// CSS class for the bar fill. `OutOfRange` gets no class at all.
    pub fn css_class(self) -> &'static str {
        match self {
            FillBand::CriticallyLow => "fill-critical",
            FillBand::Low => "fill-low",
            FillBand::Moderate => "fill-moderate",
            FillBand::High => "fill-high",
            FillBand::Full => "fill-full",
            FillBand::OutOfRange => "",
        }
    }
}

/// Width of the proportional bar in percent, clamped into `[0, 100]` so an
/// out-of-range `percfull` still draws a sane bar.
pub fn bar_width_percent(percent_full: f64) -> f64 {
    if !percent_full.is_finite() {
        return 0.0;
    }
    percent_full.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(FillBand::classify(0.0), FillBand::CriticallyLow);
        assert_eq!(FillBand::classify(20.0), FillBand::CriticallyLow);
        assert_eq!(FillBand::classify(20.5), FillBand::Low);
        assert_eq!(FillBand::classify(40.0), FillBand::Low);
        assert_eq!(FillBand::classify(60.0), FillBand::Moderate);
        assert_eq!(FillBand::classify(80.0), FillBand::High);
        assert_eq!(FillBand::classify(80.1), FillBand::Full);
        assert_eq!(FillBand::classify(100.0), FillBand::Full);
    }

    #[test]
    fn test_out_of_range_fallback() {
        assert_eq!(FillBand::classify(-3.0), FillBand::OutOfRange);
        assert_eq!(FillBand::classify(130.0), FillBand::OutOfRange);
        assert_eq!(FillBand::classify(f64::NAN), FillBand::OutOfRange);
        assert_eq!(FillBand::classify(f64::INFINITY), FillBand::OutOfRange);
        assert_eq!(FillBand::OutOfRange.css_class(), "");
    }

    #[test]
    fn test_each_band_has_distinct_class() {
        let classes = [
            FillBand::CriticallyLow.css_class(),
            FillBand::Low.css_class(),
            FillBand::Moderate.css_class(),
            FillBand::High.css_class(),
            FillBand::Full.css_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_bar_width_clamp() {
        assert_eq!(bar_width_percent(30.0), 30.0);
        assert_eq!(bar_width_percent(-5.0), 0.0);
        assert_eq!(bar_width_percent(250.0), 100.0);
        assert_eq!(bar_width_percent(f64::NAN), 0.0);
    }
}
