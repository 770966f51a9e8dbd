//! Binary member decoding

use tracing::{debug, trace};

use super::Samples;
use crate::procs::{ByteOrder, DecodeSettings, ElementType};

/// Decode the contents of one binary member
///
/// The member is read as `data.len() / 4` elements; a trailing partial
/// element is dropped. When `apply_scale` is set and the scale exponent is
/// non-zero, every sample is multiplied by `2^(-scale_exponent)` before the
/// samples are returned. Otherwise the samples are exactly the stored values.
///
/// ```rust
/// use pdata_formats::procs::{DecodeSettings, ElementType};
/// use pdata_formats::series::{decode_samples, Samples};
///
/// let settings = DecodeSettings {
///     scale_exponent: -1,
///     element_type: ElementType::Float32,
///     ..DecodeSettings::default()
/// };
/// let samples = decode_samples(&[0x00, 0x00, 0x80, 0x3F], &settings, true);
/// assert_eq!(samples, Samples::Float32(vec![2.0]));
/// ```
pub fn decode_samples(data: &[u8], settings: &DecodeSettings, apply_scale: bool) -> Samples {
    let trailing = data.len() % ElementType::SIZE;
    if trailing != 0 {
        debug!(
            "Discarding {} trailing bytes of a {} byte member",
            trailing,
            data.len()
        );
    }

    let chunks = data.chunks_exact(ElementType::SIZE);
    let order = settings.byte_order;
    let mut samples = match settings.element_type {
        ElementType::Float32 => Samples::Float32(
            chunks
                .map(|c| match order {
                    ByteOrder::Little => f32::from_le_bytes(element(c)),
                    ByteOrder::Big => f32::from_be_bytes(element(c)),
                })
                .collect(),
        ),
        ElementType::Int32 => Samples::Int32(
            chunks
                .map(|c| match order {
                    ByteOrder::Little => i32::from_le_bytes(element(c)),
                    ByteOrder::Big => i32::from_be_bytes(element(c)),
                })
                .collect(),
        ),
    };

    if apply_scale && let Some(factor) = settings.scale_factor() {
        trace!("Scaling {} samples by {}", samples.len(), factor);
        samples.scale(factor);
    }

    samples
}

fn element(chunk: &[u8]) -> [u8; 4] {
    [chunk[0], chunk[1], chunk[2], chunk[3]]
}
