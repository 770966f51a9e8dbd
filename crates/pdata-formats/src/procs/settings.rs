//! Decoding settings derived from a parameter block

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::ParameterSet;

/// Parameter holding the intensity scaling exponent
pub const NC_PROC: &str = "NC_proc";

/// Parameter holding the byte order of the binary members
pub const BYTORDP: &str = "BYTORDP";

/// Parameter holding the element type of the binary members
pub const DTYPP: &str = "DTYPP";

/// Outcome of coercing a parameter to a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting<T> {
    /// The parameter was present and parsed
    Parsed(T),
    /// The parameter was missing or unusable; the default applies
    Default(T),
}

impl<T: Copy> Setting<T> {
    /// The value, whichever way it was obtained
    pub fn value(self) -> T {
        match self {
            Self::Parsed(v) | Self::Default(v) => v,
        }
    }

    /// Whether the default was used
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default(_))
    }
}

/// Byte order of binary sample members (`BYTORDP`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Code 0
    #[default]
    Little,
    /// Any other code
    Big,
}

impl ByteOrder {
    /// Map a `BYTORDP` code to a byte order
    pub fn from_code(code: i32) -> Self {
        if code == 0 { Self::Little } else { Self::Big }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little-endian"),
            Self::Big => write!(f, "big-endian"),
        }
    }
}

/// Element type of binary sample members (`DTYPP`)
///
/// Both types are four bytes wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// 32-bit two's-complement integer (any code other than 2)
    #[default]
    Int32,
    /// 32-bit IEEE-754 float (code 2)
    Float32,
}

impl ElementType {
    /// Size of one element in bytes
    pub const SIZE: usize = 4;

    /// Map a `DTYPP` code to an element type
    pub fn from_code(code: i32) -> Self {
        if code == 2 { Self::Float32 } else { Self::Int32 }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32 => write!(f, "int32"),
            Self::Float32 => write!(f, "float32"),
        }
    }
}

/// How to decode the binary members of one parameter block
///
/// Derived once per read and shared by every member decoded with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSettings {
    /// Samples are multiplied by `2^(-scale_exponent)` (`NC_proc`)
    pub scale_exponent: i32,
    /// Byte order of each element (`BYTORDP`)
    pub byte_order: ByteOrder,
    /// Element type (`DTYPP`)
    pub element_type: ElementType,
}

impl DecodeSettings {
    /// Derive settings from a parameter set
    ///
    /// Each setting falls back to 0 on its own when its parameter is missing
    /// or not an integer.
    pub fn from_parameters(params: &ParameterSet) -> Self {
        let settings = Self {
            scale_exponent: integer_setting(params, NC_PROC),
            byte_order: ByteOrder::from_code(integer_setting(params, BYTORDP)),
            element_type: ElementType::from_code(integer_setting(params, DTYPP)),
        };
        debug!(
            "Decode settings: {} {} scale exponent {}",
            settings.byte_order, settings.element_type, settings.scale_exponent
        );
        settings
    }

    /// Factor applied to every sample, or `None` when scaling is a no-op
    pub fn scale_factor(&self) -> Option<f64> {
        if self.scale_exponent == 0 {
            None
        } else {
            Some((-f64::from(self.scale_exponent)).exp2())
        }
    }
}

impl fmt::Display for DecodeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, scale 2^{}",
            self.element_type, self.byte_order, -i64::from(self.scale_exponent)
        )
    }
}

fn integer_setting(params: &ParameterSet, key: &str) -> i32 {
    let setting = params.integer(key);
    if setting.is_default()
        && let Some(raw) = params.get(key)
    {
        warn!("{key} is not an integer ({raw:?}), using 0");
    }
    setting.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_for_empty_parameters() {
        let settings = DecodeSettings::from_parameters(&ParameterSet::new());
        assert_eq!(
            settings,
            DecodeSettings {
                scale_exponent: 0,
                byte_order: ByteOrder::Little,
                element_type: ElementType::Int32,
            }
        );
        assert_eq!(settings, DecodeSettings::default());
        assert_eq!(settings.scale_factor(), None);
    }

    #[test]
    fn test_from_parameters() {
        let params = ParameterSet::parse(Some("##$NC_proc=-1\n##$BYTORDP=1\n##$DTYPP=2\n"));
        let settings = DecodeSettings::from_parameters(&params);
        assert_eq!(settings.scale_exponent, -1);
        assert_eq!(settings.byte_order, ByteOrder::Big);
        assert_eq!(settings.element_type, ElementType::Float32);
        assert_eq!(settings.scale_factor(), Some(2.0));
    }

    #[test]
    fn test_bad_setting_only_affects_itself() {
        let params = ParameterSet::parse(Some("##$NC_proc= lots\n##$BYTORDP= 1\n##$DTYPP= 2\n"));
        let settings = DecodeSettings::from_parameters(&params);
        assert_eq!(settings.scale_exponent, 0);
        assert_eq!(settings.byte_order, ByteOrder::Big);
        assert_eq!(settings.element_type, ElementType::Float32);
    }

    #[test]
    fn test_codes() {
        assert_eq!(ByteOrder::from_code(0), ByteOrder::Little);
        assert_eq!(ByteOrder::from_code(1), ByteOrder::Big);
        assert_eq!(ByteOrder::from_code(-7), ByteOrder::Big);
        assert_eq!(ElementType::from_code(2), ElementType::Float32);
        assert_eq!(ElementType::from_code(0), ElementType::Int32);
        assert_eq!(ElementType::from_code(3), ElementType::Int32);
    }

    #[test]
    fn test_scale_factor() {
        let mut settings = DecodeSettings {
            scale_exponent: 3,
            ..DecodeSettings::default()
        };
        assert_eq!(settings.scale_factor(), Some(0.125));

        settings.scale_exponent = -4;
        assert_eq!(settings.scale_factor(), Some(16.0));

        settings.scale_exponent = i32::MIN;
        assert_eq!(settings.scale_factor(), Some(f64::INFINITY));
    }

    #[test]
    fn test_setting_accessors() {
        assert_eq!(Setting::Parsed(5).value(), 5);
        assert!(!Setting::Parsed(5).is_default());
        assert_eq!(Setting::Default(0).value(), 0);
        assert!(Setting::Default(0).is_default());
    }

    #[test]
    fn test_display() {
        let settings = DecodeSettings {
            scale_exponent: -2,
            byte_order: ByteOrder::Big,
            element_type: ElementType::Float32,
        };
        assert_eq!(settings.to_string(), "float32, big-endian, scale 2^2");
    }
}
