//! Core model for fault message generation.
//!
//! A run starts from a list of [`Trigger`]s, each naming a 32-bit alarm
//! array in controller logic. Every trigger is parsed into a scope and a
//! description stub, then fanned out into one [`FaultBitRow`] per alarm bit.
//! The output crate renders those rows into the HMI alarm spreadsheet and the
//! Logix comment import file.

mod error;
pub mod expand;
pub mod naming;
pub mod parse;
pub mod template;
pub mod trigger;

pub use error::{LoadError, Result};
pub use expand::{BITS_PER_TRIGGER, FaultBitRow, MessageFlags, expand_rows};
pub use naming::{ArtifactKind, RunTimestamp, artifact_file_name};
pub use parse::{ParsedTrigger, parse_trigger};
pub use template::{TemplateGenerator, comment_description, comment_specifier};
pub use trigger::{Trigger, load_triggers, parse_trigger_lines};
