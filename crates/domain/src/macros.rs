//! Macro for implementing Display and FromStr for calendar unit enums
//!
//! Every unit has a singular name, a plural name and one short alias. Names
//! are matched case-insensitively; the short alias is matched exactly, since
//! `M` (month) and `m` (minute) only differ by case.
//!
//! # Example
//!
//! ```rust
//! use datewise_domain::impl_unit_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Span {
//!     Day,
//!     Minute,
//! }
//!
//! impl_unit_conversions!(Span {
//!     Day => "day", "days", "d";
//!     Minute => "minute", "minutes", "m";
//! });
//!
//! assert_eq!("Days".parse::<Span>().unwrap(), Span::Day);
//! assert_eq!(Span::Minute.to_string(), "minute");
//! ```

/// Implements Display and FromStr for unit enums
///
/// This macro generates:
/// - Display: writes the singular name
/// - FromStr: accepts the exact short alias, or the singular/plural name in
///   any case; anything else is a [`crate::DateError::InvalidUnit`]
#[macro_export]
macro_rules! impl_unit_conversions {
    (
        $enum_name:ident {
            $($variant:ident => $name:literal, $plural:literal, $short:literal);+ $(;)?
        }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($name),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::DateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s == $short {
                        return Ok(Self::$variant);
                    }
                )+
                $(
                    if s.eq_ignore_ascii_case($name) || s.eq_ignore_ascii_case($plural) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::DateError::InvalidUnit(s.to_string()))
            }
        }
    };
}
