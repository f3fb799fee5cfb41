#![cfg_attr(docsrs, feature(doc_cfg))]
//! WordprocessingML simple types.
//!
//! Coercion from raw attribute strings into domain values: closed
//! enumerations, unit-scaled measurements, union types tried in declared
//! member order, colors, booleans, and date-times. Coercion is total over
//! schema-valid input; anything else fails with a [`TypeError`] instead of
//! being papered over with a default.

use chrono::NaiveDateTime;
use thiserror::Error;

mod color;
mod enums;
mod measure;

pub use color::{Color, Rgb};
pub use enums::*;
pub use measure::{
    parse_eighth_points, parse_half_points, parse_signed_twips, parse_twips, EighthPoints, Emu,
    HalfPoints, MeasureUnit, Twips, UniversalMeasure,
};

/// Error type produced by simple-type coercion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The raw string is not a member of the closed token set.
    #[error("unknown {ty} token: {token}")]
    UnknownToken {
        /// Schema simple-type name.
        ty: &'static str,
        /// Offending raw token.
        token: String,
    },
    /// The raw string failed numeric parsing for the declared type.
    #[error("invalid {ty} value: {raw}")]
    Number {
        /// Schema simple-type name.
        ty: &'static str,
        /// Offending raw value.
        raw: String,
    },
    /// Every union member representation was attempted and all failed.
    #[error("no {ty} branch accepts {raw}: {detail}")]
    UnionExhausted {
        /// Schema union type name.
        ty: &'static str,
        /// Offending raw value.
        raw: String,
        /// Underlying failures, in attempt order.
        detail: String,
    },
    /// Neither `auto` nor a 6-hex-digit RGB value.
    #[error("invalid color value: {0}")]
    Color(String),
    /// Not a `%Y-%m-%d %H:%M:%S` date-time.
    #[error("invalid date-time: {0}")]
    DateTime(String),
}

/// Decode an `ST_OnOff` token.
///
/// `1`/`true`/`on` and `0`/`false`/`off` are the only members; anything
/// else is a conformance violation. The "absent attribute means true"
/// rule for toggle elements lives at the accessor, not here.
pub fn parse_on_off(raw: &str) -> Result<bool, TypeError> {
    match raw {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        other => Err(TypeError::UnknownToken {
            ty: "ST_OnOff",
            token: other.to_string(),
        }),
    }
}

/// Decode an `ST_DecimalNumber` (signed integer).
pub fn parse_decimal(raw: &str) -> Result<i64, TypeError> {
    raw.parse().map_err(|_| TypeError::Number {
        ty: "ST_DecimalNumber",
        raw: raw.to_string(),
    })
}

/// Decode an `ST_UnsignedDecimalNumber`.
pub fn parse_unsigned_decimal(raw: &str) -> Result<u64, TypeError> {
    raw.parse().map_err(|_| TypeError::Number {
        ty: "ST_UnsignedDecimalNumber",
        raw: raw.to_string(),
    })
}

/// Decode a `%Y-%m-%d %H:%M:%S` date-time. No timezone handling; parse
/// failures propagate.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime, TypeError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map_err(|err| TypeError::DateTime(format!("{raw}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_off_tokens() {
        for token in ["1", "true", "on"] {
            assert_eq!(parse_on_off(token), Ok(true));
        }
        for token in ["0", "false", "off"] {
            assert_eq!(parse_on_off(token), Ok(false));
        }
        assert!(matches!(
            parse_on_off("yes"),
            Err(TypeError::UnknownToken { ty: "ST_OnOff", .. })
        ));
    }

    #[test]
    fn decimal_numbers() {
        assert_eq!(parse_decimal("-42"), Ok(-42));
        assert_eq!(parse_unsigned_decimal("7"), Ok(7));
        assert!(parse_unsigned_decimal("-7").is_err());
        assert!(parse_decimal("7.5").is_err());
    }

    #[test]
    fn datetime_fixed_format() {
        let dt = parse_datetime("2013-12-23 23:15:00").expect("valid date-time");
        assert_eq!(dt.to_string(), "2013-12-23 23:15:00");
        assert!(matches!(
            parse_datetime("2013-12-23T23:15:00Z"),
            Err(TypeError::DateTime(_))
        ));
    }

    #[test]
    fn repeated_decodes_are_equal() {
        assert_eq!(parse_decimal("720"), parse_decimal("720"));
        assert_eq!(
            parse_datetime("2020-01-01 00:00:00"),
            parse_datetime("2020-01-01 00:00:00")
        );
    }
}
