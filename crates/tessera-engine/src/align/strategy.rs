use core::str::FromStr;

use super::ParseAlignError;

/// Placement of inner content along one axis of an outer extent.
///
/// The variant set is closed. Layout rules pick one of the canonical values
/// ([`Align::MIN`], [`Align::MID`], [`Align::MAX`]) once, and every call site then
/// evaluates [`align`](Self::align) uniformly.
///
/// Inputs are not validated: negative extents or an inner extent larger than the
/// outer one simply produce a negative or out-of-range offset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Align {
    /// Start edge; offset is always `0`.
    #[default]
    Min,
    /// Centered; offset is `(outer - inner) / 2`.
    Mid,
    /// End edge; offset is `outer - inner`.
    Max,
}

impl Align {
    pub const MIN: Align = Align::Min;
    pub const MID: Align = Align::Mid;
    pub const MAX: Align = Align::Max;

    /// Offset of an `inner` extent placed inside an `outer` extent.
    #[inline]
    pub fn align(self, outer: f32, inner: f32) -> f32 {
        match self {
            Align::Min => 0.0,
            Align::Mid => (outer - inner) / 2.0,
            Align::Max => outer - inner,
        }
    }

    /// Offset within `size` when no inner extent is known yet.
    ///
    /// Equivalent to `align(size, 0.0)`.
    #[inline]
    pub fn align_size(self, size: f32) -> f32 {
        self.align(size, 0.0)
    }
}

impl FromStr for Align {
    type Err = ParseAlignError;

    /// Maps document keywords onto the three canonical values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "min" | "start" | "left" | "top" | "xMin" | "yMin" => Ok(Align::Min),
            "mid" | "middle" | "center" | "xMid" | "yMid" => Ok(Align::Mid),
            "max" | "end" | "right" | "bottom" | "xMax" | "yMax" => Ok(Align::Max),
            other => Err(ParseAlignError::new(format!("unknown alignment keyword '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f32; 9] = [0.0, 1.0, -1.0, 40.0, 100.0, 0.5, -250.25, 1e6, 33.3];

    // ── formulas ──────────────────────────────────────────────────────────

    #[test]
    fn min_is_always_zero() {
        for outer in SAMPLES {
            for inner in SAMPLES {
                assert_eq!(Align::MIN.align(outer, inner), 0.0);
            }
        }
    }

    #[test]
    fn mid_is_half_the_slack() {
        for outer in SAMPLES {
            for inner in SAMPLES {
                assert_eq!(Align::MID.align(outer, inner), (outer - inner) / 2.0);
            }
            assert_eq!(Align::MID.align(outer, 0.0), outer / 2.0);
        }
    }

    #[test]
    fn max_is_the_full_slack() {
        for outer in SAMPLES {
            assert_eq!(Align::MAX.align(outer, 0.0), outer);
            assert_eq!(Align::MAX.align(outer, outer), 0.0);
        }
    }

    #[test]
    fn single_argument_form_matches_zero_inner() {
        for a in [Align::MIN, Align::MID, Align::MAX] {
            for size in SAMPLES {
                assert_eq!(a.align_size(size), a.align(size, 0.0));
            }
        }
    }

    #[test]
    fn box_of_100_with_content_of_40() {
        assert_eq!(Align::MID.align(100.0, 40.0), 30.0);
        assert_eq!(Align::MAX.align(100.0, 40.0), 60.0);
        assert_eq!(Align::MIN.align(100.0, 40.0), 0.0);
    }

    #[test]
    fn oversized_inner_yields_negative_offset() {
        assert_eq!(Align::MID.align(10.0, 30.0), -10.0);
        assert_eq!(Align::MAX.align(10.0, 30.0), -20.0);
    }

    // ── keywords ──────────────────────────────────────────────────────────

    #[test]
    fn parses_document_keywords() {
        assert_eq!("start".parse::<Align>().unwrap(), Align::MIN);
        assert_eq!("middle".parse::<Align>().unwrap(), Align::MID);
        assert_eq!("end".parse::<Align>().unwrap(), Align::MAX);
        assert_eq!(" xMid ".parse::<Align>().unwrap(), Align::MID);
        assert_eq!("yMax".parse::<Align>().unwrap(), Align::MAX);
    }

    #[test]
    fn rejects_unknown_keyword() {
        let err = "sideways".parse::<Align>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn canonical_values_are_shareable() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Align>();
    }
}
