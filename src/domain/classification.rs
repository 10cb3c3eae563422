// Flare classification - mapping flux magnitude to a severity tier

/// X-class lower bound (W/m²).
pub const X_CLASS_THRESHOLD: f64 = 1e-4;
/// M-class lower bound (W/m²). Also the alert threshold for period maxima.
pub const M_CLASS_THRESHOLD: f64 = 1e-5;
/// C-class lower bound (W/m²).
pub const C_CLASS_THRESHOLD: f64 = 1e-6;

/// Severity tier derived from a single flux value. Ordered so that
/// comparisons follow severity rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlareClass {
    Nominal,
    CClass,
    MClass,
    XClass,
}

impl FlareClass {
    /// Total over positive reals, with inclusive lower bounds: a reading
    /// exactly at a boundary lands in the higher tier.
    pub fn classify(flux: f64) -> Self {
        if flux >= X_CLASS_THRESHOLD {
            FlareClass::XClass
        } else if flux >= M_CLASS_THRESHOLD {
            FlareClass::MClass
        } else if flux >= C_CLASS_THRESHOLD {
            FlareClass::CClass
        } else {
            FlareClass::Nominal
        }
    }

    pub fn severity_rank(&self) -> u8 {
        match self {
            FlareClass::Nominal => 0,
            FlareClass::CClass => 1,
            FlareClass::MClass => 2,
            FlareClass::XClass => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlareClass::Nominal => "NOMINAL",
            FlareClass::CClass => "C-CLASS",
            FlareClass::MClass => "M-CLASS",
            FlareClass::XClass => "X-CLASS",
        }
    }

    /// Fixed color association used by the chart page.
    pub fn color(&self) -> &'static str {
        match self {
            FlareClass::Nominal => "green",
            FlareClass::CClass => "yellow",
            FlareClass::MClass => "orange",
            FlareClass::XClass => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values_classify_into_higher_tier() {
        assert_eq!(FlareClass::classify(1e-4), FlareClass::XClass);
        assert_eq!(FlareClass::classify(1e-5), FlareClass::MClass);
        assert_eq!(FlareClass::classify(1e-6), FlareClass::CClass);
        assert_eq!(FlareClass::classify(9.999e-7), FlareClass::Nominal);
    }

    #[test]
    fn test_mid_band_values() {
        assert_eq!(FlareClass::classify(5e-4), FlareClass::XClass);
        assert_eq!(FlareClass::classify(3.2e-5), FlareClass::MClass);
        assert_eq!(FlareClass::classify(7e-6), FlareClass::CClass);
        assert_eq!(FlareClass::classify(1e-8), FlareClass::Nominal);
    }

    #[test]
    fn test_rank_label_color() {
        assert_eq!(FlareClass::Nominal.severity_rank(), 0);
        assert_eq!(FlareClass::XClass.severity_rank(), 3);
        assert_eq!(FlareClass::MClass.label(), "M-CLASS");
        assert_eq!(FlareClass::CClass.color(), "yellow");
        assert!(FlareClass::XClass > FlareClass::MClass);
    }
}
