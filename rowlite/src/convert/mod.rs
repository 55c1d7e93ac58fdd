// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Typed-value conversion from raw result cells
//!
//! A cell is one column of the current row: either SQL NULL or the
//! server's textual rendering of the value. Two traits split the work:
//!
//! - [`FromCell`] parses the text of a present cell into one semantic type.
//! - [`BindValue`] applies a cell to a destination, deciding what NULL and
//!   parse failure mean for that destination. Plain destinations are left
//!   untouched on failure; `Option<T>` destinations absorb NULL and parse
//!   failure as `None`.
//!
//! Supported semantic types: bool, 32/64-bit signed and unsigned integers,
//! f32/f64, `String`, and chrono's `NaiveDate` / `NaiveTime` /
//! `NaiveDateTime` for SQL temporal literals.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ConvertError;

/// SQL temporal literal formats accepted for date/time cells.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Parse the text of one present (non-NULL) cell into a semantic type.
pub trait FromCell: Sized {
    /// Convert raw cell text into `Self`.
    fn from_cell(raw: &str) -> Result<Self, ConvertError>;
}

macro_rules! from_cell_via_parse {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromCell for $ty {
                fn from_cell(raw: &str) -> Result<Self, ConvertError> {
                    raw.parse::<$ty>()
                        .map_err(|_| ConvertError::parse(raw, $name))
                }
            }
        )*
    };
}

from_cell_via_parse! {
    i32 => "i32",
    u32 => "u32",
    i64 => "i64",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
}

impl FromCell for bool {
    // SQL servers render booleans as small integers; any nonzero
    // integer literal is true.
    fn from_cell(raw: &str) -> Result<Self, ConvertError> {
        raw.parse::<i64>()
            .map(|v| v != 0)
            .map_err(|_| ConvertError::parse(raw, "bool"))
    }
}

impl FromCell for String {
    fn from_cell(raw: &str) -> Result<Self, ConvertError> {
        Ok(raw.to_string())
    }
}

impl FromCell for NaiveDate {
    fn from_cell(raw: &str) -> Result<Self, ConvertError> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ConvertError::parse(raw, "NaiveDate"))
    }
}

impl FromCell for NaiveTime {
    fn from_cell(raw: &str) -> Result<Self, ConvertError> {
        NaiveTime::parse_from_str(raw, TIME_FORMAT)
            .map_err(|_| ConvertError::parse(raw, "NaiveTime"))
    }
}

impl FromCell for NaiveDateTime {
    // Accepts both DATETIME and DATE literals; a bare date is midnight.
    fn from_cell(raw: &str) -> Result<Self, ConvertError> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
            return Ok(dt);
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| ConvertError::parse(raw, "NaiveDateTime"))
    }
}

/// Apply one cell to a typed destination.
///
/// The return value reports whether a value was produced for a plain
/// destination. Nullable destinations (`Option<T>`) treat NULL and parse
/// failure as the normal "absent" outcome and report success.
pub trait BindValue {
    /// Bind `cell` (None = SQL NULL) into `self`.
    ///
    /// Plain destinations: on NULL or parse failure the destination is
    /// left untouched and `false` is returned.
    fn bind(&mut self, cell: Option<&str>) -> bool;
}

macro_rules! bind_value_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl BindValue for $ty {
                fn bind(&mut self, cell: Option<&str>) -> bool {
                    match cell {
                        Some(raw) => match <$ty as FromCell>::from_cell(raw) {
                            Ok(v) => {
                                *self = v;
                                true
                            }
                            Err(_) => false,
                        },
                        None => false,
                    }
                }
            }
        )*
    };
}

bind_value_plain! {
    bool,
    i32,
    u32,
    i64,
    u64,
    f32,
    f64,
    String,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
}

impl<T: FromCell> BindValue for Option<T> {
    fn bind(&mut self, cell: Option<&str>) -> bool {
        *self = cell.and_then(|raw| T::from_cell(raw).ok());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_round_trip() {
        assert_eq!(i32::from_cell("42"), Ok(42));
        assert_eq!(i32::from_cell("-17"), Ok(-17));
        assert_eq!(u64::from_cell("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(i64::from_cell("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn floats_round_trip() {
        assert_eq!(f64::from_cell("62.5"), Ok(62.5));
        assert_eq!(f32::from_cell("-0.25"), Ok(-0.25));
    }

    #[test]
    fn bool_uses_integer_lexical_form() {
        assert_eq!(bool::from_cell("1"), Ok(true));
        assert_eq!(bool::from_cell("0"), Ok(false));
        assert_eq!(bool::from_cell("5"), Ok(true));
        assert!(bool::from_cell("yes").is_err());
    }

    #[test]
    fn overflow_is_a_parse_failure() {
        assert!(matches!(
            i32::from_cell("999999999999"),
            Err(ConvertError::Parse { .. })
        ));
        assert!(matches!(
            u32::from_cell("-1"),
            Err(ConvertError::Parse { .. })
        ));
    }

    #[test]
    fn datetime_accepts_date_and_datetime_literals() {
        let d = NaiveDate::from_ymd_opt(1981, 7, 18).unwrap();
        assert_eq!(NaiveDate::from_cell("1981-07-18"), Ok(d));
        assert_eq!(
            NaiveDateTime::from_cell("1981-07-18"),
            Ok(d.and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(
            NaiveDateTime::from_cell("1981-07-18 09:30:15"),
            Ok(d.and_hms_opt(9, 30, 15).unwrap())
        );
        assert!(NaiveDateTime::from_cell("last tuesday").is_err());
    }

    #[test]
    fn null_leaves_plain_destination_unchanged() {
        let mut v = 7_i32;
        assert!(!v.bind(None));
        assert_eq!(v, 7);

        let mut s = String::from("keep");
        assert!(!s.bind(None));
        assert_eq!(s, "keep");
    }

    #[test]
    fn parse_failure_leaves_plain_destination_unchanged() {
        let mut v = 7_i32;
        assert!(!v.bind(Some("not-a-number")));
        assert_eq!(v, 7);
    }

    #[test]
    fn nullable_absorbs_null_as_absent() {
        let mut v: Option<f64> = Some(1.0);
        assert!(v.bind(None));
        assert_eq!(v, None);
    }

    #[test]
    fn nullable_absorbs_parse_failure_as_absent() {
        let mut v: Option<i32> = Some(3);
        assert!(v.bind(Some("garbage")));
        assert_eq!(v, None);
    }

    #[test]
    fn nullable_takes_present_value() {
        let mut v: Option<f64> = None;
        assert!(v.bind(Some("56.0")));
        assert_eq!(v, Some(56.0));
    }

    #[test]
    fn string_never_fails_when_present() {
        let mut s = String::new();
        assert!(s.bind(Some("")));
        assert_eq!(s, "");
        assert!(s.bind(Some("Tran Thi Y")));
        assert_eq!(s, "Tran Thi Y");
    }
}
