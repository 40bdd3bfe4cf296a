//! wavemix - a mono WAV codec and level mixing library written in Rust
//!
//! wavemix reads and writes the constrained RIFF/WAVE profile used for
//! interchange of mono audio in unsigned 8-bit PCM or 32-bit IEEE float,
//! and mixes two decoded streams with independent gain levels.
//!
//! # Architecture
//!
//! wavemix is organized into a few key modules:
//!
//! - `format`: RIFF/WAVE container parsing and writing
//! - `codec`: codec descriptors and sample buffers
//! - `mix`: two-input level mixing
//! - `error`: crate-wide error and result types

pub mod codec;
pub mod error;
pub mod format;
pub mod mix;

pub use codec::sample::SampleBuffer;
pub use codec::{CodecDescriptor, CodecKind, CodecParams, SampleFormat, WavDescriptor};
pub use error::{Error, Result};
pub use format::wav::{decode, encode};
pub use mix::mix;

/// wavemix version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;

/// Configuration for the wavemix library
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable per-field parser output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize the wavemix library with the given configuration
///
/// Installs a process-wide tracing subscriber when logging is requested.
/// Calling this is optional; without it the parser events go nowhere.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "trace" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to install tracing subscriber: {}", e)))?;
    }

    Ok(())
}
