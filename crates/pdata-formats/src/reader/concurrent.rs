//! Concurrent reads from asynchronous archives

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use super::{ReadOptions, build_series};
use crate::archive::{ArchiveResult, AsyncPdataArchive};
use crate::procs::{DecodeSettings, ParameterSet};
use crate::series::DecodedSeries;

/// Asynchronous counterpart of [`read_processed_data`](super::read_processed_data)
///
/// Binary members are read concurrently; the results are returned in the
/// order the members were requested, not the order the reads completed.
pub async fn read_processed_data_async<A: AsyncPdataArchive + ?Sized>(
    archive: &A,
    options: &ReadOptions,
) -> ArchiveResult<Vec<DecodedSeries>> {
    let text = archive.read_text(&options.parameter_member).await?;
    if text.is_none() {
        info!(
            "Parameter member {} not found, using default decoding settings",
            options.parameter_member
        );
    }

    let parameters = Arc::new(ParameterSet::parse(text.as_deref()));
    decode_async(
        archive,
        &options.binary_members,
        parameters,
        options.apply_scale,
    )
    .await
}

/// Asynchronous counterpart of [`decode`](super::decode)
///
/// If any read fails the whole call fails; no partially decoded member is
/// ever returned.
pub async fn decode_async<A, S>(
    archive: &A,
    binary_members: &[S],
    parameters: Arc<ParameterSet>,
    apply_scale: bool,
) -> ArchiveResult<Vec<DecodedSeries>>
where
    A: AsyncPdataArchive + ?Sized,
    S: AsRef<str>,
{
    let settings = DecodeSettings::from_parameters(&parameters);

    let contents = try_join_all(
        binary_members
            .iter()
            .map(|member| archive.read_bytes(member.as_ref())),
    )
    .await?;

    let results: Vec<DecodedSeries> = binary_members
        .iter()
        .zip(contents)
        .filter_map(|(member, data)| {
            let member = member.as_ref();
            if data.is_none() {
                debug!("Binary member {member} not found, skipping");
            }
            data.map(|data| build_series(member, &data, &parameters, settings, apply_scale))
        })
        .collect();

    debug!(
        "Decoded {} of {} requested members",
        results.len(),
        binary_members.len()
    );
    Ok(results)
}
