/// A musical interval commonly used as a type-scale ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedRatio {
    pub name: &'static str,
    pub value: f64,
}

pub const NAMED_RATIOS: &[NamedRatio] = &[
    NamedRatio { name: "Minor Second", value: 1.067 },
    NamedRatio { name: "Major Second", value: 1.125 },
    NamedRatio { name: "Minor Third", value: 1.2 },
    NamedRatio { name: "Major Third", value: 1.25 },
    NamedRatio { name: "Perfect Fourth", value: 1.333 },
    NamedRatio { name: "Augmented Fourth", value: 1.414 },
    NamedRatio { name: "Perfect Fifth", value: 1.5 },
    NamedRatio { name: "Minor Sixth", value: 1.6 },
    NamedRatio { name: "Golden Ratio", value: 1.618 },
    NamedRatio { name: "Major Sixth", value: 1.667 },
    NamedRatio { name: "Minor Seventh", value: 1.778 },
    NamedRatio { name: "Major Seventh", value: 1.875 },
    NamedRatio { name: "Octave", value: 2.0 },
];

const RATIO_MATCH_EPSILON: f64 = 1e-6;

/// Label for a ratio value, `None` for free entries.
pub fn named_ratio(value: f64) -> Option<&'static NamedRatio> {
    NAMED_RATIOS
        .iter()
        .find(|ratio| (ratio.value - value).abs() < RATIO_MATCH_EPSILON)
}
