//! Subcommand implementations.
//!
//! Each command writes to the given writer so it can be exercised without a
//! terminal.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use pdata_formats::archive::{DirectoryArchive, PdataArchive, ZipArchive};
use pdata_formats::procs::{DecodeSettings, ParameterSet};
use pdata_formats::reader::{ReadOptions, read_processed_data};

use crate::config::{DecodeArgs, ParamsArgs};
use crate::output::{preview, summary};

/// Open a pdata directory or a ZIP file.
pub fn open_archive(path: &Path) -> Result<Box<dyn PdataArchive>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot access archive {}", path.display()))?;

    if metadata.is_dir() {
        info!("Reading pdata directory {}", path.display());
        let archive = DirectoryArchive::open(path)
            .with_context(|| format!("Cannot open directory {}", path.display()))?;
        Ok(Box::new(archive))
    } else {
        info!("Reading ZIP archive {}", path.display());
        let archive = ZipArchive::open(path)
            .with_context(|| format!("Cannot open ZIP archive {}", path.display()))?;
        Ok(Box::new(archive))
    }
}

/// `pdata members`
pub fn members(archive: &dyn PdataArchive, out: &mut impl Write) -> Result<()> {
    for name in archive.member_names().context("Cannot list archive members")? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ParamsReport<'a> {
    member: &'a str,
    found: bool,
    parameters: &'a ParameterSet,
    settings: DecodeSettings,
}

/// `pdata params`
pub fn params(archive: &dyn PdataArchive, args: &ParamsArgs, out: &mut impl Write) -> Result<()> {
    let text = archive
        .read_text(&args.procs)
        .with_context(|| format!("Cannot read {}", args.procs))?;
    if text.is_none() {
        warn!("Parameter member {} not found", args.procs);
    }

    let parameters = ParameterSet::parse(text.as_deref());
    let settings = DecodeSettings::from_parameters(&parameters);

    if args.json {
        let report = ParamsReport {
            member: &args.procs,
            found: text.is_some(),
            parameters: &parameters,
            settings,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for (name, value) in parameters.iter() {
        writeln!(out, "{name} = {value}")?;
    }
    writeln!(out, "settings: {settings}")?;
    Ok(())
}

/// `pdata decode`
pub fn decode(archive: &dyn PdataArchive, args: &DecodeArgs, out: &mut impl Write) -> Result<()> {
    let options = ReadOptions::new()
        .binary_members(args.members.iter().cloned())
        .parameter_member(args.parameter_member())
        .apply_scale(!args.no_scale);

    let series = read_processed_data(archive, &options)
        .with_context(|| format!("Cannot decode {}", args.members.join(", ")))?;

    let found: HashSet<&str> = series.iter().map(|s| s.member.as_str()).collect();
    for missing in args.members.iter().filter(|m| !found.contains(m.as_str())) {
        warn!("Binary member {missing} not found");
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &series)?;
        writeln!(out)?;
        return Ok(());
    }

    for s in &series {
        writeln!(out, "{}", summary(s))?;
        writeln!(out, "{}", preview(&s.samples, args.limit))?;
    }
    Ok(())
}
