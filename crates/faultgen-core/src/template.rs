//! String templates for HMI alarm references and Logix comments.

use crate::parse::ParsedTrigger;
use crate::trigger::Trigger;

/// Renders HMI reference strings for one controller shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGenerator {
    shortcut: String,
}

impl TemplateGenerator {
    pub fn new(shortcut: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
        }
    }

    /// Tag reference used as the alarm trigger, e.g. `{::[PLC1]Faults.Motor}`.
    pub fn trigger_ref(&self, trigger: &Trigger) -> String {
        format!("{{::[{}]{}}}", self.shortcut, trigger)
    }

    /// Embedded message text that displays the description of one fault bit.
    pub fn fault_message(&self, trigger: &Trigger, bit_index: u8) -> String {
        format!(
            "/*S:0 {{::[{}]{}.{}.@Description*/",
            self.shortcut, trigger, bit_index
        )
    }
}

/// Placeholder description written for every bit until the fault is named.
pub fn comment_description(parsed: &ParsedTrigger<'_>, bit_index: u8) -> String {
    let scope = parsed.scope();
    let stub = parsed.description_stub();
    if scope.is_empty() {
        format!("- SPARE - {stub}.{bit_index}")
    } else {
        format!("- SPARE - {scope} {stub}.{bit_index}")
    }
}

/// Member path of the commented bit, relative to the `Faults` tag.
pub fn comment_specifier(parsed: &ParsedTrigger<'_>, bit_index: u8) -> String {
    format!("Faults.{}.{bit_index}", parsed.description_stub())
}
