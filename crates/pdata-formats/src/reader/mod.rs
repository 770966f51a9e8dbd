//! Reading processed data out of an archive
//!
//! [`read_processed_data`] is the entry point: it parses the parameter
//! member once, derives the decoding settings once, then decodes each
//! requested binary member in order.
//!
//! ```rust
//! use pdata_formats::archive::MemoryArchive;
//! use pdata_formats::reader::{read_processed_data, ReadOptions};
//! use pdata_formats::series::Samples;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = MemoryArchive::new()
//!     .with_member("procs", "##$NC_proc=-1\n##$BYTORDP=0\n##$DTYPP=2\n")
//!     .with_member("1r", vec![0x00, 0x00, 0x80, 0x3F]);
//!
//! let series = read_processed_data(&archive, &ReadOptions::default())?;
//! assert_eq!(series.len(), 1);
//! assert_eq!(series[0].samples, Samples::Float32(vec![2.0]));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "async")]
mod concurrent;

use std::sync::Arc;

use tracing::{debug, info};

use crate::archive::{ArchiveResult, PdataArchive};
use crate::procs::{DecodeSettings, ParameterSet};
use crate::series::{DecodedSeries, decode_samples};

#[cfg(feature = "async")]
pub use concurrent::{decode_async, read_processed_data_async};

/// Default binary member: the real part of a 1D spectrum
pub const DEFAULT_BINARY_MEMBER: &str = "1r";

/// Default parameter member
pub const DEFAULT_PARAMETER_MEMBER: &str = "procs";

/// Which members to read and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Binary members to decode, in output order
    pub binary_members: Vec<String>,
    /// Parameter member describing the binary members
    pub parameter_member: String,
    /// Whether to apply the `NC_proc` scale factor
    pub apply_scale: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            binary_members: vec![DEFAULT_BINARY_MEMBER.to_string()],
            parameter_member: DEFAULT_PARAMETER_MEMBER.to_string(),
            apply_scale: true,
        }
    }
}

impl ReadOptions {
    /// Options with the defaults: `1r` described by `procs`, scaled
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the binary members to decode
    pub fn binary_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.binary_members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Set the parameter member
    pub fn parameter_member(mut self, name: impl Into<String>) -> Self {
        self.parameter_member = name.into();
        self
    }

    /// Enable or disable scaling
    pub fn apply_scale(mut self, apply: bool) -> Self {
        self.apply_scale = apply;
        self
    }
}

/// Read the parameter member and the binary members it describes
///
/// A missing parameter member gives an empty parameter set, so every setting
/// takes its default. A missing binary member is skipped, which makes the
/// output shorter than `options.binary_members`; each result carries its
/// member name. Only a fault of the archive itself is an error.
pub fn read_processed_data<A: PdataArchive + ?Sized>(
    archive: &A,
    options: &ReadOptions,
) -> ArchiveResult<Vec<DecodedSeries>> {
    let text = archive.read_text(&options.parameter_member)?;
    if text.is_none() {
        info!(
            "Parameter member {} not found, using default decoding settings",
            options.parameter_member
        );
    }

    let parameters = Arc::new(ParameterSet::parse(text.as_deref()));
    decode(
        archive,
        &options.binary_members,
        parameters,
        options.apply_scale,
    )
}

/// Decode binary members with an already parsed parameter set
///
/// Settings are derived once and shared by every member of the call.
pub fn decode<A, S>(
    archive: &A,
    binary_members: &[S],
    parameters: Arc<ParameterSet>,
    apply_scale: bool,
) -> ArchiveResult<Vec<DecodedSeries>>
where
    A: PdataArchive + ?Sized,
    S: AsRef<str>,
{
    let settings = DecodeSettings::from_parameters(&parameters);
    let mut results = Vec::with_capacity(binary_members.len());

    for member in binary_members {
        let member = member.as_ref();
        let Some(data) = archive.read_bytes(member)? else {
            debug!("Binary member {member} not found, skipping");
            continue;
        };
        results.push(build_series(member, &data, &parameters, settings, apply_scale));
    }

    debug!(
        "Decoded {} of {} requested members",
        results.len(),
        binary_members.len()
    );
    Ok(results)
}

fn build_series(
    member: &str,
    data: &[u8],
    parameters: &Arc<ParameterSet>,
    settings: DecodeSettings,
    apply_scale: bool,
) -> DecodedSeries {
    let samples = decode_samples(data, &settings, apply_scale);
    debug!("Decoded {} samples from {member}", samples.len());

    DecodedSeries {
        member: member.to_string(),
        parameters: Arc::clone(parameters),
        settings,
        scaled: apply_scale && settings.scale_factor().is_some(),
        samples,
    }
}
