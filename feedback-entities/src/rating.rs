use std::fmt;

use thiserror::Error;

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id         : Id,
    pub page_id    : String,
    pub name       : String,
    pub value      : RatingValue,
    pub created_at : Timestamp,
}

/// Number of stars, from 1 to 5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Rating value {0} is out of range")]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    #[must_use]
    pub const fn min() -> Self {
        Self(1)
    }

    #[must_use]
    pub const fn max() -> Self {
        Self(5)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|v| v.is_valid())
            .ok_or(RatingValueOutOfRange(from))
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for i64 {
    fn from(from: RatingValue) -> Self {
        i64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    /// Rounds half away from zero to one decimal digit.
    ///
    /// The decision is made on the exact decimal expansion of the
    /// binary value, i.e. the result is the same as formatting the
    /// value with one fractional digit: 4.25 becomes 4.3 while 4.35
    /// (stored as 4.34999...) becomes 4.3.
    #[must_use]
    pub fn round_to_tenths(self) -> Self {
        let Self(value) = self;
        if !value.is_finite() {
            return self;
        }
        // Enough digits to cover the whole mantissa
        let exact = format!("{:.60}", value.abs());
        let Some((int_part, frac_part)) = exact.split_once('.') else {
            return self;
        };
        let Ok(int_part) = int_part.parse::<u64>() else {
            return self;
        };
        let mut frac_digits = frac_part.bytes().map(|b| u64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let mut scaled = int_part * 10 + tenths;
        if hundredths >= 5 {
            scaled += 1;
        }
        Self((scaled as f64 / 10.0).copysign(value))
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

/// Count and rounded mean of a set of ratings.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AverageRating {
    pub average: AvgRatingValue,
    pub count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(val);
        self.cnt += 1;
    }

    #[must_use]
    pub fn build(self) -> AverageRating {
        let Self { acc, cnt } = self;
        if cnt == 0 {
            return AverageRating::default();
        }
        let mean = AvgRatingValue::from(acc as f64 / cnt as f64);
        AverageRating {
            average: mean.round_to_tenths(),
            count: cnt,
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

impl Extend<RatingValue> for AvgRatingValueBuilder {
    fn extend<T: IntoIterator<Item = RatingValue>>(&mut self, iter: T) {
        for val in iter {
            self.add(val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avg_of(values: &[i64]) -> AverageRating {
        let mut builder = AvgRatingValueBuilder::default();
        builder.extend(values.iter().map(|v| RatingValue::try_from(*v).unwrap()));
        builder.build()
    }

    #[test]
    fn rating_value_range() {
        assert!(RatingValue::try_from(0).is_err());
        assert!(RatingValue::try_from(6).is_err());
        assert!(RatingValue::try_from(-3).is_err());
        assert!(RatingValue::try_from(300).is_err());
        for v in 1..=5 {
            assert_eq!(i64::from(RatingValue::try_from(v).unwrap()), v);
        }
    }

    #[test]
    fn average_of_nothing() {
        let avg = avg_of(&[]);
        assert_eq!(avg.count, 0);
        assert_eq!(f64::from(avg.average), 0.0);
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let avg = avg_of(&[5, 4, 4]);
        assert_eq!(avg.count, 3);
        assert_eq!(f64::from(avg.average), 4.3);

        assert_eq!(f64::from(avg_of(&[1, 2]).average), 1.5);
        assert_eq!(f64::from(avg_of(&[5, 5, 4]).average), 4.7);
        assert_eq!(f64::from(avg_of(&[3]).average), 3.0);
    }

    #[test]
    fn exact_ties_are_rounded_up() {
        // 17 / 4 = 4.25 exactly
        assert_eq!(f64::from(avg_of(&[5, 4, 4, 4]).average), 4.3);
        // 5 / 4 = 1.25 exactly
        assert_eq!(f64::from(avg_of(&[2, 1, 1, 1]).average), 1.3);
    }

    #[test]
    fn binary_values_below_a_tie_are_rounded_down() {
        // 87 / 20 = 4.35 is stored as 4.3499999...
        let mut values = vec![5; 7];
        values.extend(vec![4; 13]);
        assert_eq!(values.iter().sum::<i64>(), 87);
        let avg = avg_of(&values);
        assert_eq!(avg.count, 20);
        assert_eq!(f64::from(avg.average), 4.3);
    }

    #[test]
    fn rounding_of_negative_and_special_values() {
        assert_eq!(f64::from(AvgRatingValue::from(-1.25).round_to_tenths()), -1.3);
        assert!(f64::from(AvgRatingValue::from(f64::NAN).round_to_tenths()).is_nan());
    }
}
