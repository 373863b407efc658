//! Rounding whose behavior is defined by the
//! [font specification](https://learn.microsoft.com/en-us/typography/opentype/spec/otff).

/// Floating-point rounding per the [OpenType spec][spec].
///
/// <https://github.com/fonttools/fonttools/issues/1248#issuecomment-383198166> captures the rationale
/// for the current implementation.
///
/// [spec]: https://docs.microsoft.com/en-us/typography/opentype/spec/otvaroverview#coordinate-scales-and-normalization
pub trait OtRound<U, T = Self> {
    /// Round to the nearest value, ties away from negative infinity.
    fn ot_round(self) -> U;
}

impl OtRound<i32> for f64 {
    #[inline]
    fn ot_round(self) -> i32 {
        (self + 0.5).floor() as i32
    }
}

impl OtRound<i32> for f32 {
    #[inline]
    fn ot_round(self) -> i32 {
        (self + 0.5).floor() as i32
    }
}
