//! User-facing copy for the proposal screens.

/// Copy shown by the asking and accepted screens. Every field can be
/// overridden from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalText {
    pub question_lead: String,
    pub question_word: String,
    pub yes_label: String,
    pub no_label: String,
    pub accepted_heading: String,
    pub accepted_line: String,
    pub accepted_subline: String,
    pub reset_label: String,
    pub footer: String,
}

impl Default for ProposalText {
    fn default() -> Self {
        Self {
            question_lead: "Will you be my".to_string(),
            question_word: "Valentine?".to_string(),
            yes_label: "Yes".to_string(),
            no_label: "No".to_string(),
            accepted_heading: "Yay!".to_string(),
            accepted_line: "I knew you'd say yes!".to_string(),
            accepted_subline: "Happy Valentine's Day, my love".to_string(),
            reset_label: "Ask me again".to_string(),
            footer: "Made with love".to_string(),
        }
    }
}
