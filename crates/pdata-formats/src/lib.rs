//! Decoder for Bruker NMR processed data (pdata)
//!
//! A processed data set pairs a text parameter block (`procs`) with one or
//! more headerless binary sample arrays (`1r`, `1i`, ...). The parameter
//! block declares how the arrays are stored:
//!
//! - `BYTORDP`: byte order (0 little-endian, anything else big-endian)
//! - `DTYPP`: element type (2 is 32-bit float, anything else 32-bit integer)
//! - `NC_proc`: scaling exponent, samples are multiplied by `2^(-NC_proc)`
//!
//! # Modules
//!
//! - [`archive`]: containers holding the members (memory, directory, ZIP)
//! - [`procs`]: parameter block parsing and decoding settings
//! - [`series`]: binary member decoding
//! - [`reader`]: reading a whole processed data set
//!
//! # Example
//!
//! ```rust,no_run
//! use pdata_formats::archive::ZipArchive;
//! use pdata_formats::reader::{read_processed_data, ReadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = ZipArchive::open("glucose.zip")?;
//! let options = ReadOptions::new()
//!     .binary_members(["10/pdata/1/1r", "10/pdata/1/1i"])
//!     .parameter_member("10/pdata/1/procs");
//!
//! for series in read_processed_data(&archive, &options)? {
//!     println!("{}: {} samples", series.member, series.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Degraded input
//!
//! Nothing about the data itself is fatal. A missing parameter member means
//! default settings, a missing binary member is skipped, a malformed
//! parameter line is ignored, an unparsable setting falls back to 0, and a
//! trailing partial element is dropped. Only faults of the container are
//! reported as errors.

#![warn(missing_docs)]

pub mod archive;
pub mod procs;
pub mod reader;
pub mod series;

pub use archive::{ArchiveError, ArchiveResult, PdataArchive};
pub use procs::{ByteOrder, DecodeSettings, ElementType, ParameterSet};
pub use reader::{ReadOptions, read_processed_data};
pub use series::{DecodedSeries, Samples};

#[cfg(feature = "async")]
pub use archive::AsyncPdataArchive;
#[cfg(feature = "async")]
pub use reader::read_processed_data_async;
