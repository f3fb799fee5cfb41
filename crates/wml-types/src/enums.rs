//! Closed enumeration simple types.
//!
//! Each type maps its schema token set 1:1 onto an enum: every declared
//! literal decodes to a distinct member and every member re-encodes to the
//! original literal. Unrecognized tokens are a hard error; there is no
//! catch-all member and no silent fallback to a default.

use crate::TypeError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $st:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Schema simple-type name.
            pub const NAME: &'static str = $st;

            /// Every member, in schema declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Decode a schema token.
            pub fn from_token(token: &str) -> Result<Self, TypeError> {
                match token {
                    $( $token => Ok($name::$variant), )+
                    other => Err(TypeError::UnknownToken {
                        ty: $st,
                        token: other.to_string(),
                    }),
                }
            }

            /// The schema token for this member.
            pub const fn token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

string_enum! {
    /// `ST_NumberFormat`: numbering style of a list level.
    NumberFormat, "ST_NumberFormat" {
        Decimal => "decimal",
        UpperRoman => "upperRoman",
        LowerRoman => "lowerRoman",
        UpperLetter => "upperLetter",
        LowerLetter => "lowerLetter",
        Ordinal => "ordinal",
        CardinalText => "cardinalText",
        OrdinalText => "ordinalText",
        Hex => "hex",
        Chicago => "chicago",
        IdeographDigital => "ideographDigital",
        JapaneseCounting => "japaneseCounting",
        Aiueo => "aiueo",
        Iroha => "iroha",
        DecimalFullWidth => "decimalFullWidth",
        DecimalHalfWidth => "decimalHalfWidth",
        JapaneseLegal => "japaneseLegal",
        JapaneseDigitalTenThousand => "japaneseDigitalTenThousand",
        DecimalEnclosedCircle => "decimalEnclosedCircle",
        DecimalFullWidth2 => "decimalFullWidth2",
        AiueoFullWidth => "aiueoFullWidth",
        IrohaFullWidth => "irohaFullWidth",
        DecimalZero => "decimalZero",
        Bullet => "bullet",
        Ganada => "ganada",
        Chosung => "chosung",
        DecimalEnclosedFullstop => "decimalEnclosedFullstop",
        DecimalEnclosedParen => "decimalEnclosedParen",
        DecimalEnclosedCircleChinese => "decimalEnclosedCircleChinese",
        IdeographEnclosedCircle => "ideographEnclosedCircle",
        IdeographTraditional => "ideographTraditional",
        IdeographZodiac => "ideographZodiac",
        IdeographZodiacTraditional => "ideographZodiacTraditional",
        TaiwaneseCounting => "taiwaneseCounting",
        IdeographLegalTraditional => "ideographLegalTraditional",
        TaiwaneseCountingThousand => "taiwaneseCountingThousand",
        TaiwaneseDigital => "taiwaneseDigital",
        ChineseCounting => "chineseCounting",
        ChineseLegalSimplified => "chineseLegalSimplified",
        ChineseCountingThousand => "chineseCountingThousand",
        KoreanDigital => "koreanDigital",
        KoreanCounting => "koreanCounting",
        KoreanLegal => "koreanLegal",
        KoreanDigital2 => "koreanDigital2",
        VietnameseCounting => "vietnameseCounting",
        RussianLower => "russianLower",
        RussianUpper => "russianUpper",
        None => "none",
        NumberInDash => "numberInDash",
        Hebrew1 => "hebrew1",
        Hebrew2 => "hebrew2",
        ArabicAlpha => "arabicAlpha",
        ArabicAbjad => "arabicAbjad",
        HindiVowels => "hindiVowels",
        HindiConsonants => "hindiConsonants",
        HindiNumbers => "hindiNumbers",
        HindiCounting => "hindiCounting",
        ThaiLetters => "thaiLetters",
        ThaiNumbers => "thaiNumbers",
        ThaiCounting => "thaiCounting",
        BahtText => "bahtText",
        DollarText => "dollarText",
        Custom => "custom",
    }
}

string_enum! {
    /// `ST_Jc`: paragraph alignment.
    Justification, "ST_Jc" {
        Start => "start",
        Center => "center",
        End => "end",
        Both => "both",
        MediumKashida => "mediumKashida",
        Distribute => "distribute",
        NumTab => "numTab",
        HighKashida => "highKashida",
        LowKashida => "lowKashida",
        ThaiDistribute => "thaiDistribute",
        Left => "left",
        Right => "right",
    }
}

string_enum! {
    /// `ST_Underline`: underline pattern of a run.
    Underline, "ST_Underline" {
        Single => "single",
        Words => "words",
        Double => "double",
        Thick => "thick",
        Dotted => "dotted",
        DottedHeavy => "dottedHeavy",
        Dash => "dash",
        DashedHeavy => "dashedHeavy",
        DashLong => "dashLong",
        DashLongHeavy => "dashLongHeavy",
        DotDash => "dotDash",
        DashDotHeavy => "dashDotHeavy",
        DotDotDash => "dotDotDash",
        DashDotDotHeavy => "dashDotDotHeavy",
        Wave => "wave",
        WavyHeavy => "wavyHeavy",
        WavyDouble => "wavyDouble",
        None => "none",
    }
}

string_enum! {
    /// `ST_HighlightColor`: text highlight color.
    HighlightColor, "ST_HighlightColor" {
        Black => "black",
        Blue => "blue",
        Cyan => "cyan",
        Green => "green",
        Magenta => "magenta",
        Red => "red",
        Yellow => "yellow",
        White => "white",
        DarkBlue => "darkBlue",
        DarkCyan => "darkCyan",
        DarkGreen => "darkGreen",
        DarkMagenta => "darkMagenta",
        DarkRed => "darkRed",
        DarkYellow => "darkYellow",
        DarkGray => "darkGray",
        LightGray => "lightGray",
        None => "none",
    }
}

string_enum! {
    /// `ST_VerticalAlignRun`: sub/superscript positioning of a run.
    VerticalAlignRun, "ST_VerticalAlignRun" {
        Baseline => "baseline",
        Superscript => "superscript",
        Subscript => "subscript",
    }
}

string_enum! {
    /// `ST_Border`: line style of a border edge.
    BorderStyle, "ST_Border" {
        Nil => "nil",
        None => "none",
        Single => "single",
        Thick => "thick",
        Double => "double",
        Dotted => "dotted",
        Dashed => "dashed",
        DotDash => "dotDash",
        DotDotDash => "dotDotDash",
        Triple => "triple",
        ThinThickSmallGap => "thinThickSmallGap",
        ThickThinSmallGap => "thickThinSmallGap",
        ThinThickThinSmallGap => "thinThickThinSmallGap",
        ThinThickMediumGap => "thinThickMediumGap",
        ThickThinMediumGap => "thickThinMediumGap",
        ThinThickThinMediumGap => "thinThickThinMediumGap",
        ThinThickLargeGap => "thinThickLargeGap",
        ThickThinLargeGap => "thickThinLargeGap",
        ThinThickThinLargeGap => "thinThickThinLargeGap",
        Wave => "wave",
        DoubleWave => "doubleWave",
        DashSmallGap => "dashSmallGap",
        DashDotStroked => "dashDotStroked",
        ThreeDEmboss => "threeDEmboss",
        ThreeDEngrave => "threeDEngrave",
        Outset => "outset",
        Inset => "inset",
    }
}

string_enum! {
    /// `ST_BrType`: kind of break produced by `w:br`.
    BreakType, "ST_BrType" {
        Page => "page",
        Column => "column",
        TextWrapping => "textWrapping",
    }
}

string_enum! {
    /// `ST_BrClear`: restart location of a text-wrapping break.
    BreakClear, "ST_BrClear" {
        None => "none",
        Left => "left",
        Right => "right",
        All => "all",
    }
}

string_enum! {
    /// `ST_TabJc`: alignment of a custom tab stop.
    TabAlignment, "ST_TabJc" {
        Clear => "clear",
        Start => "start",
        Center => "center",
        End => "end",
        Decimal => "decimal",
        Bar => "bar",
        Num => "num",
        Left => "left",
        Right => "right",
    }
}

string_enum! {
    /// `ST_TabTlc`: leader character of a custom tab stop.
    TabLeader, "ST_TabTlc" {
        None => "none",
        Dot => "dot",
        Hyphen => "hyphen",
        Underscore => "underscore",
        Heavy => "heavy",
        MiddleDot => "middleDot",
    }
}

string_enum! {
    /// `ST_LineSpacingRule`: interpretation of the `w:line` value.
    LineSpacingRule, "ST_LineSpacingRule" {
        Auto => "auto",
        Exact => "exact",
        AtLeast => "atLeast",
    }
}

string_enum! {
    /// `ST_TblWidth`: interpretation of a table width value.
    TableWidthType, "ST_TblWidth" {
        Nil => "nil",
        Pct => "pct",
        Dxa => "dxa",
        Auto => "auto",
    }
}

string_enum! {
    /// `ST_SectionMark`: where a section begins.
    SectionMark, "ST_SectionMark" {
        NextPage => "nextPage",
        NextColumn => "nextColumn",
        Continuous => "continuous",
        EvenPage => "evenPage",
        OddPage => "oddPage",
    }
}

string_enum! {
    /// `ST_Merge`: vertical merge state of a table cell.
    VerticalMerge, "ST_Merge" {
        Continue => "continue",
        Restart => "restart",
    }
}

string_enum! {
    /// `ST_HeightRule`: interpretation of a row height value.
    HeightRule, "ST_HeightRule" {
        Auto => "auto",
        Exact => "exact",
        AtLeast => "atLeast",
    }
}

string_enum! {
    /// `ST_PageOrientation`: page orientation of a section.
    PageOrientation, "ST_PageOrientation" {
        Portrait => "portrait",
        Landscape => "landscape",
    }
}

string_enum! {
    /// `ST_ThemeColor`: theme palette slot referenced by a color.
    ThemeColor, "ST_ThemeColor" {
        Dark1 => "dark1",
        Light1 => "light1",
        Dark2 => "dark2",
        Light2 => "light2",
        Accent1 => "accent1",
        Accent2 => "accent2",
        Accent3 => "accent3",
        Accent4 => "accent4",
        Accent5 => "accent5",
        Accent6 => "accent6",
        Hyperlink => "hyperlink",
        FollowedHyperlink => "followedHyperlink",
        None => "none",
        Background1 => "background1",
        Text1 => "text1",
        Background2 => "background2",
        Text2 => "text2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_bijective<T>(all: &[T], from_token: fn(&str) -> Result<T, TypeError>)
    where
        T: Copy + PartialEq + core::fmt::Debug,
        T: Tokened,
    {
        let mut seen = HashSet::new();
        for member in all {
            let token = member.token_str();
            assert!(seen.insert(token), "duplicate token {token}");
            assert_eq!(from_token(token).unwrap(), *member);
        }
    }

    trait Tokened {
        fn token_str(&self) -> &'static str;
    }

    macro_rules! impl_tokened {
        ($($ty:ident),+) => {
            $(impl Tokened for $ty {
                fn token_str(&self) -> &'static str {
                    self.token()
                }
            })+
        };
    }

    impl_tokened!(
        NumberFormat,
        Justification,
        Underline,
        HighlightColor,
        VerticalAlignRun,
        BorderStyle,
        BreakType,
        BreakClear,
        TabAlignment,
        TabLeader,
        LineSpacingRule,
        TableWidthType,
        SectionMark,
        VerticalMerge,
        HeightRule,
        PageOrientation,
        ThemeColor
    );

    #[test]
    fn every_enumeration_is_bijective() {
        assert_bijective(NumberFormat::ALL, NumberFormat::from_token);
        assert_bijective(Justification::ALL, Justification::from_token);
        assert_bijective(Underline::ALL, Underline::from_token);
        assert_bijective(HighlightColor::ALL, HighlightColor::from_token);
        assert_bijective(VerticalAlignRun::ALL, VerticalAlignRun::from_token);
        assert_bijective(BorderStyle::ALL, BorderStyle::from_token);
        assert_bijective(BreakType::ALL, BreakType::from_token);
        assert_bijective(BreakClear::ALL, BreakClear::from_token);
        assert_bijective(TabAlignment::ALL, TabAlignment::from_token);
        assert_bijective(TabLeader::ALL, TabLeader::from_token);
        assert_bijective(LineSpacingRule::ALL, LineSpacingRule::from_token);
        assert_bijective(TableWidthType::ALL, TableWidthType::from_token);
        assert_bijective(SectionMark::ALL, SectionMark::from_token);
        assert_bijective(VerticalMerge::ALL, VerticalMerge::from_token);
        assert_bijective(HeightRule::ALL, HeightRule::from_token);
        assert_bijective(PageOrientation::ALL, PageOrientation::from_token);
        assert_bijective(ThemeColor::ALL, ThemeColor::from_token);
    }

    #[test]
    fn upper_roman_decodes_to_its_own_member() {
        // Not the schema's decimal fallback, and not an error.
        let format = NumberFormat::from_token("upperRoman").unwrap();
        assert_eq!(format, NumberFormat::UpperRoman);
        assert_ne!(format, NumberFormat::Decimal);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = NumberFormat::from_token("upperroman").unwrap_err();
        assert!(matches!(
            err,
            TypeError::UnknownToken {
                ty: "ST_NumberFormat",
                ..
            }
        ));
        assert!(Justification::from_token("justify").is_err());
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(NumberFormat::UpperRoman.to_string(), "upperRoman");
        assert_eq!(VerticalMerge::Continue.to_string(), "continue");
    }
}
