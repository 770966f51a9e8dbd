//! Decoded sample series (`1r`, `1i`, `2rr`, ...)
//!
//! Binary members are flat arrays of four-byte elements with no header. The
//! element type, byte order and intensity scaling all come from the
//! parameter block that accompanies them; see [`DecodeSettings`].

mod decode;

use std::sync::Arc;

use serde::Serialize;

use crate::procs::{DecodeSettings, ElementType, ParameterSet};

pub use decode::decode_samples;

/// Samples of one binary member, in the element type they were stored as
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Samples {
    /// 32-bit float elements (`DTYPP = 2`)
    Float32(Vec<f32>),
    /// 32-bit integer elements (any other `DTYPP`)
    Int32(Vec<i32>),
}

impl Samples {
    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            Self::Float32(v) => v.len(),
            Self::Int32(v) => v.len(),
        }
    }

    /// Whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type of the samples
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Float32(_) => ElementType::Float32,
            Self::Int32(_) => ElementType::Int32,
        }
    }

    /// Sample at `index` widened to `f64`
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Self::Float32(v) => v.get(index).map(|&x| f64::from(x)),
            Self::Int32(v) => v.get(index).map(|&x| f64::from(x)),
        }
    }

    /// Iterate over the samples widened to `f64`
    pub fn iter_f64(&self) -> impl Iterator<Item = f64> + '_ {
        let (floats, ints): (&[f32], &[i32]) = match self {
            Self::Float32(v) => (v.as_slice(), &[][..]),
            Self::Int32(v) => (&[][..], v.as_slice()),
        };
        floats
            .iter()
            .map(|&x| f64::from(x))
            .chain(ints.iter().map(|&x| f64::from(x)))
    }

    /// Copy the samples into an `f64` vector
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.iter_f64().collect()
    }

    /// Float samples, if that is how they were stored
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::Float32(v) => Some(v),
            Self::Int32(_) => None,
        }
    }

    /// Integer samples, if that is how they were stored
    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            Self::Int32(v) => Some(v),
            Self::Float32(_) => None,
        }
    }

    /// Multiply every sample by `factor`
    ///
    /// Float samples are rounded to the nearest `f32`. Integer samples are
    /// truncated toward zero and saturate at the `i32` range; a NaN product
    /// becomes 0. Readers that store the product into a wrapping 32-bit
    /// buffer reduce out-of-range values modulo 2^32 instead, so results
    /// only agree while the product fits in `i32`.
    pub(crate) fn scale(&mut self, factor: f64) {
        match self {
            Self::Float32(v) => {
                for x in v.iter_mut() {
                    *x = (f64::from(*x) * factor) as f32;
                }
            }
            Self::Int32(v) => {
                for x in v.iter_mut() {
                    *x = (f64::from(*x) * factor) as i32;
                }
            }
        }
    }
}

/// One decoded binary member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedSeries {
    /// Name of the binary member the samples came from
    pub member: String,
    /// Parameter block used for decoding, shared by every series of a read
    pub parameters: Arc<ParameterSet>,
    /// Settings derived from `parameters`
    pub settings: DecodeSettings,
    /// Whether the `NC_proc` scale factor was applied
    pub scaled: bool,
    /// Decoded samples
    pub samples: Samples,
}

impl DecodedSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the member held no complete element
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let floats = Samples::Float32(vec![1.5, -2.0]);
        assert_eq!(floats.len(), 2);
        assert_eq!(floats.element_type(), ElementType::Float32);
        assert_eq!(floats.get(1), Some(-2.0));
        assert_eq!(floats.get(2), None);
        assert_eq!(floats.as_f32(), Some(&[1.5f32, -2.0][..]));
        assert_eq!(floats.as_i32(), None);

        let ints = Samples::Int32(vec![7, -8, 9]);
        assert_eq!(ints.element_type(), ElementType::Int32);
        assert_eq!(ints.to_f64_vec(), vec![7.0, -8.0, 9.0]);
        assert_eq!(ints.as_f32(), None);

        assert!(Samples::Int32(Vec::new()).is_empty());
    }

    #[test]
    fn test_scale_floats_rounds_to_f32() {
        let mut samples = Samples::Float32(vec![1.0, -3.0, 0.1]);
        samples.scale(0.5);
        assert_eq!(samples, Samples::Float32(vec![0.5, -1.5, (f64::from(0.1f32) * 0.5) as f32]));
    }

    #[test]
    fn test_scale_integers_truncates_toward_zero() {
        let mut samples = Samples::Int32(vec![7, -7, 1, -1, 100]);
        samples.scale(0.25);
        assert_eq!(samples, Samples::Int32(vec![1, -1, 0, 0, 25]));
    }

    #[test]
    fn test_scale_integers_saturates() {
        let mut samples = Samples::Int32(vec![i32::MAX, i32::MIN, 3]);
        samples.scale(4.0);
        assert_eq!(samples, Samples::Int32(vec![i32::MAX, i32::MIN, 12]));

        let mut samples = Samples::Int32(vec![0]);
        samples.scale(f64::INFINITY);
        assert_eq!(samples, Samples::Int32(vec![0]));
    }

    #[test]
    fn test_serialize() {
        let series = DecodedSeries {
            member: "1r".to_string(),
            parameters: Arc::new(ParameterSet::parse(Some("##$DTYPP= 0\n"))),
            settings: DecodeSettings::default(),
            scaled: false,
            samples: Samples::Int32(vec![1, 2]),
        };
        let json = serde_json::to_value(&series).expect("serialize");
        assert_eq!(json["member"], "1r");
        assert_eq!(json["parameters"]["DTYPP"], "0");
        assert_eq!(json["settings"]["byte_order"], "little");
        assert_eq!(json["settings"]["element_type"], "int32");
        assert_eq!(json["samples"]["int32"][1], 2);
        assert_eq!(series.len(), 2);
    }
}
