//! Text rendering of decoded series.

use std::fmt::Display;

use pdata_formats::series::{DecodedSeries, Samples};

/// Render at most `limit` samples joined by `, `, ending in `, ...` when
/// samples were left out.
pub fn preview(samples: &Samples, limit: usize) -> String {
    match samples {
        Samples::Float32(v) => join_preview(v, limit),
        Samples::Int32(v) => join_preview(v, limit),
    }
}

fn join_preview<T: Display>(values: &[T], limit: usize) -> String {
    let shown: Vec<String> = values.iter().take(limit).map(ToString::to_string).collect();
    let mut out = shown.join(", ");
    if values.len() > limit {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str("...");
    }
    out
}

/// One-line summary of a series.
pub fn summary(series: &DecodedSeries) -> String {
    let scale = if series.scaled {
        format!(", scaled by 2^{}", -i64::from(series.settings.scale_exponent))
    } else {
        String::new()
    };
    format!(
        "{}: {} {} samples ({}{scale})",
        series.member,
        series.len(),
        series.samples.element_type(),
        series.settings.byte_order
    )
}
