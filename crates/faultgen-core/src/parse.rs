//! Scope and description stub extraction from trigger tag paths.

use crate::trigger::Trigger;

/// Marks a program-scoped tag (`Program:<scope>.<member>`).
const SCOPE_START: char = ':';

/// Ends the scope segment. Searched from the start of the trigger, not from
/// the scope marker.
const SCOPE_END: char = '.';

/// Token after which the description stub begins.
const FAULTS_TOKEN: &str = "Faults";

/// Characters skipped from the start of [`FAULTS_TOKEN`] to reach the stub:
/// the six token characters plus the one separator that follows them.
const STUB_OFFSET_CHARS: usize = FAULTS_TOKEN.len() + 1;

/// Fields derived from a trigger.
///
/// `None` means the delimiter the field depends on is absent. A present
/// field may still be empty, e.g. when `.` precedes `:` or the trigger ends
/// right after `Faults`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedTrigger<'a> {
    pub scope: Option<&'a str>,
    pub description_stub: Option<&'a str>,
}

impl<'a> ParsedTrigger<'a> {
    /// Scope, or an empty string for controller-scoped triggers.
    pub fn scope(&self) -> &'a str {
        self.scope.unwrap_or_default()
    }

    /// Description stub, or an empty string when `Faults` is absent.
    pub fn description_stub(&self) -> &'a str {
        self.description_stub.unwrap_or_default()
    }
}

/// Parse the scope and description stub of a trigger.
pub fn parse_trigger(trigger: &Trigger) -> ParsedTrigger<'_> {
    let text = trigger.as_str();
    ParsedTrigger {
        scope: extract_scope(text),
        description_stub: extract_description_stub(text),
    }
}

fn extract_scope(text: &str) -> Option<&str> {
    let start = text.find(SCOPE_START)?;
    let end = text.find(SCOPE_END)?;
    // A `.` before the `:` gives an empty slice rather than a reversed range.
    Some(text.get(start + SCOPE_START.len_utf8()..end).unwrap_or(""))
}

fn extract_description_stub(text: &str) -> Option<&str> {
    let start = text.find(FAULTS_TOKEN)?;
    let mut rest = text[start..].chars();
    for _ in 0..STUB_OFFSET_CHARS {
        if rest.next().is_none() {
            break;
        }
    }
    Some(rest.as_str())
}
