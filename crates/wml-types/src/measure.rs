//! Length measurements and their union-typed string forms.
//!
//! WordprocessingML measures lengths in twentieths of a point (twips) for
//! most layout properties, half-points for font sizes, eighths of a point
//! for border widths, and EMU for drawing coordinates. The per-property
//! divisor is fixed by the schema; an off-by-factor conversion silently
//! corrupts every size computed downstream, so each scale gets its own
//! newtype and the divisor appears exactly once.

use crate::TypeError;

/// Twips per inch (1 inch = 1440 twentieths of a point).
pub const TWIPS_PER_INCH: f64 = 1440.0;
/// Twips per point.
pub const TWIPS_PER_POINT: f64 = 20.0;
/// EMU per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// A signed length in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twips(pub i64);

impl Twips {
    /// Length in points.
    pub fn points(self) -> f64 {
        self.0 as f64 / TWIPS_PER_POINT
    }

    /// Length in inches.
    pub fn inches(self) -> f64 {
        self.0 as f64 / TWIPS_PER_INCH
    }

    /// Length in millimetres.
    pub fn mm(self) -> f64 {
        self.inches() * 25.4
    }
}

/// A font-size style length in half-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfPoints(pub u64);

impl HalfPoints {
    /// Size in points (half-points divided by exactly 2).
    pub fn points(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

/// A border-width length in eighths of a point, stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EighthPoints(pub u64);

impl EighthPoints {
    /// Width in points (eighths divided by exactly 8).
    pub fn points(self) -> f64 {
        self.0 as f64 / 8.0
    }
}

/// A drawing coordinate in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emu(pub i64);

impl Emu {
    /// Length in inches.
    pub fn inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    /// Length in points.
    pub fn points(self) -> f64 {
        self.inches() * 72.0
    }
}

/// Physical unit suffix of a universal measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureUnit {
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Inches.
    In,
    /// Points.
    Pt,
    /// Picas (`pc`).
    Pc,
    /// Picas, alternate token (`pi`).
    Pi,
}

impl MeasureUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "mm" => Some(MeasureUnit::Mm),
            "cm" => Some(MeasureUnit::Cm),
            "in" => Some(MeasureUnit::In),
            "pt" => Some(MeasureUnit::Pt),
            "pc" => Some(MeasureUnit::Pc),
            "pi" => Some(MeasureUnit::Pi),
            _ => None,
        }
    }

    /// Twips per one unit.
    fn twips_factor(self) -> f64 {
        match self {
            MeasureUnit::Mm => TWIPS_PER_INCH / 25.4,
            MeasureUnit::Cm => TWIPS_PER_INCH / 2.54,
            MeasureUnit::In => TWIPS_PER_INCH,
            MeasureUnit::Pt => TWIPS_PER_POINT,
            MeasureUnit::Pc | MeasureUnit::Pi => TWIPS_PER_POINT * 12.0,
        }
    }
}

/// A `ST_UniversalMeasure` value: decimal number plus physical unit suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniversalMeasure {
    /// Numeric magnitude, possibly negative.
    pub value: f64,
    /// Unit suffix.
    pub unit: MeasureUnit,
}

fn invalid_measure(raw: &str) -> TypeError {
    TypeError::Number {
        ty: "ST_UniversalMeasure",
        raw: raw.to_string(),
    }
}

impl UniversalMeasure {
    /// Parse a `-?[0-9]+(\.[0-9]+)?(mm|cm|in|pt|pc|pi)` string.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if raw.len() < 3 || !raw.is_ascii() {
            return Err(invalid_measure(raw));
        }
        let (digits, suffix) = raw.split_at(raw.len() - 2);
        let unit = MeasureUnit::from_suffix(suffix).ok_or_else(|| invalid_measure(raw))?;
        if !digits
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'.' || b == b'-')
        {
            return Err(invalid_measure(raw));
        }
        let value: f64 = digits.parse().map_err(|_| invalid_measure(raw))?;
        Ok(UniversalMeasure { value, unit })
    }

    /// Convert to twips, rounding to the nearest twip.
    pub fn to_twips(self) -> Twips {
        Twips((self.value * self.unit.twips_factor()).round() as i64)
    }

    /// Convert to half-points, rounding to the nearest half-point.
    pub fn to_half_points(self) -> Result<HalfPoints, TypeError> {
        let halves = (self.value * self.unit.twips_factor() / 10.0).round();
        if halves < 0.0 {
            return Err(TypeError::Number {
                ty: "ST_PositiveUniversalMeasure",
                raw: format!("{}", self.value),
            });
        }
        Ok(HalfPoints(halves as u64))
    }
}

/// Decode an `ST_SignedTwipsMeasure`: integer twips first, universal
/// measure second. The member order is the schema's; some raw strings
/// parse under either branch, so the order is load-bearing.
pub fn parse_signed_twips(raw: &str) -> Result<Twips, TypeError> {
    match raw.parse::<i64>() {
        Ok(twips) => Ok(Twips(twips)),
        Err(int_err) => match UniversalMeasure::parse(raw) {
            Ok(measure) => Ok(measure.to_twips()),
            Err(unit_err) => Err(TypeError::UnionExhausted {
                ty: "ST_SignedTwipsMeasure",
                raw: raw.to_string(),
                detail: format!("{int_err}; {unit_err}"),
            }),
        },
    }
}

/// Decode an `ST_TwipsMeasure`: unsigned integer twips first, positive
/// universal measure second.
pub fn parse_twips(raw: &str) -> Result<Twips, TypeError> {
    match raw.parse::<u64>() {
        Ok(twips) => Ok(Twips(twips as i64)),
        Err(int_err) => match UniversalMeasure::parse(raw) {
            Ok(measure) if measure.value >= 0.0 => Ok(measure.to_twips()),
            Ok(_) => Err(TypeError::Number {
                ty: "ST_TwipsMeasure",
                raw: raw.to_string(),
            }),
            Err(unit_err) => Err(TypeError::UnionExhausted {
                ty: "ST_TwipsMeasure",
                raw: raw.to_string(),
                detail: format!("{int_err}; {unit_err}"),
            }),
        },
    }
}

/// Decode an `ST_HpsMeasure`: unsigned half-points first, positive
/// universal measure second.
pub fn parse_half_points(raw: &str) -> Result<HalfPoints, TypeError> {
    match raw.parse::<u64>() {
        Ok(halves) => Ok(HalfPoints(halves)),
        Err(int_err) => match UniversalMeasure::parse(raw) {
            Ok(measure) => measure.to_half_points(),
            Err(unit_err) => Err(TypeError::UnionExhausted {
                ty: "ST_HpsMeasure",
                raw: raw.to_string(),
                detail: format!("{int_err}; {unit_err}"),
            }),
        },
    }
}

/// Decode an `ST_EighthPointMeasure` (plain unsigned integer).
pub fn parse_eighth_points(raw: &str) -> Result<EighthPoints, TypeError> {
    raw.parse().map(EighthPoints).map_err(|_| TypeError::Number {
        ty: "ST_EighthPointMeasure",
        raw: raw.to_string(),
    })
}
