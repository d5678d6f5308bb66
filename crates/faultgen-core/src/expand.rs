//! Fan-out of triggers into per-bit fault rows.

use crate::parse::{ParsedTrigger, parse_trigger};
use crate::template::{TemplateGenerator, comment_description, comment_specifier};
use crate::trigger::Trigger;

/// Alarm bits addressed by one trigger (a DINT fault word).
pub const BITS_PER_TRIGGER: u8 = 32;

/// Fixed per-message columns of the HMI alarm import sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFlags {
    /// Value of the unnamed `-` column.
    pub marker: u32,
    pub display: u32,
    pub audio: u32,
    pub print: u32,
    pub message_to_tag: u32,
    pub background: u32,
    pub foreground: u32,
}

impl MessageFlags {
    /// Values written for every generated message.
    pub const DEFAULT: Self = Self {
        marker: 1,
        display: 0,
        audio: 0,
        print: 0,
        message_to_tag: 0,
        background: 128,
        foreground: 16_777_215,
    };

    /// Flag values in sheet column order, starting at the `-` column.
    pub fn as_columns(&self) -> [u32; 7] {
        [
            self.marker,
            self.display,
            self.audio,
            self.print,
            self.message_to_tag,
            self.background,
            self.foreground,
        ]
    }
}

impl Default for MessageFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One alarm bit of one trigger, with every string both outputs need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultBitRow<'a> {
    pub trigger: &'a Trigger,
    pub parsed: ParsedTrigger<'a>,
    pub bit_index: u8,
    pub trigger_ref: String,
    pub fault_message: String,
    pub flags: MessageFlags,
}

impl FaultBitRow<'_> {
    /// One-based trigger value that selects this message in the HMI.
    pub fn trigger_value(&self) -> u32 {
        u32::from(self.bit_index) + 1
    }

    /// True for the first row generated from each trigger.
    pub fn is_first_bit(&self) -> bool {
        self.bit_index == 0
    }

    pub fn scope(&self) -> &str {
        self.parsed.scope()
    }

    pub fn description(&self) -> String {
        comment_description(&self.parsed, self.bit_index)
    }

    pub fn specifier(&self) -> String {
        comment_specifier(&self.parsed, self.bit_index)
    }
}

/// Expand triggers into fault rows: trigger input order, then bit 0 to 31.
///
/// Every trigger yields exactly [`BITS_PER_TRIGGER`] rows whether or not its
/// scope or description stub could be parsed.
pub fn expand_rows<'a>(
    triggers: &'a [Trigger],
    templates: &TemplateGenerator,
) -> Vec<FaultBitRow<'a>> {
    let mut rows = Vec::with_capacity(triggers.len() * usize::from(BITS_PER_TRIGGER));
    for trigger in triggers {
        let parsed = parse_trigger(trigger);
        let trigger_ref = templates.trigger_ref(trigger);
        tracing::trace!(
            %trigger,
            scope = parsed.scope(),
            stub = parsed.description_stub(),
            "expanding trigger"
        );
        for bit_index in 0..BITS_PER_TRIGGER {
            rows.push(FaultBitRow {
                trigger,
                parsed,
                bit_index,
                trigger_ref: trigger_ref.clone(),
                fault_message: templates.fault_message(trigger, bit_index),
                flags: MessageFlags::DEFAULT,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::parse_trigger_lines;

    #[test]
    fn test_expands_32_rows_per_trigger_in_order() {
        let triggers = parse_trigger_lines("Program:A.Faults.X\nB\n");
        let templates = TemplateGenerator::new("PLC");
        let rows = expand_rows(&triggers, &templates);

        assert_eq!(rows.len(), 64);
        assert_eq!(rows[0].trigger.as_str(), "Program:A.Faults.X");
        assert_eq!(rows[31].bit_index, 31);
        assert_eq!(rows[32].trigger.as_str(), "B");
        assert_eq!(rows[32].bit_index, 0);
        assert!(rows[32].is_first_bit());
    }

    #[test]
    fn test_unparseable_trigger_still_expands() {
        let triggers = parse_trigger_lines("JustATag\n");
        let rows = expand_rows(&triggers, &TemplateGenerator::new("PLC"));
        assert_eq!(rows.len(), usize::from(BITS_PER_TRIGGER));
        assert_eq!(rows[5].scope(), "");
        assert_eq!(rows[5].specifier(), "Faults..5");
        assert_eq!(rows[5].description(), "- SPARE - .5");
    }

    #[test]
    fn test_row_fields() {
        let triggers = parse_trigger_lines("Program:Main.Faults.MotorOverload\n");
        let rows = expand_rows(&triggers, &TemplateGenerator::new("PLC1"));
        let row = &rows[4];
        assert_eq!(row.trigger_value(), 5);
        assert_eq!(row.trigger_ref, "{::[PLC1]Program:Main.Faults.MotorOverload}");
        assert_eq!(
            row.fault_message,
            "/*S:0 {::[PLC1]Program:Main.Faults.MotorOverload.4.@Description*/"
        );
        assert_eq!(row.description(), "- SPARE - Main MotorOverload.4");
        assert_eq!(row.specifier(), "Faults.MotorOverload.4");
        assert_eq!(row.flags.as_columns(), [1, 0, 0, 0, 0, 128, 16_777_215]);
    }

    #[test]
    fn test_empty_trigger_list() {
        let rows = expand_rows(&[], &TemplateGenerator::new("PLC"));
        assert!(rows.is_empty());
    }
}
