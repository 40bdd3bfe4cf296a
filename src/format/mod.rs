//! Container format handling
//!
//! This module provides functionality for reading and writing the audio
//! container formats the library understands.

pub mod wav;
