/// Per-row radio value meaning "approve".
pub const VALUE_APPROVE: &str = "approve";
/// Per-row radio value meaning "reject".
pub const VALUE_REJECT: &str = "reject";
/// Per-row radio value meaning "leave pending".
pub const VALUE_PENDING: &str = "pending";
/// Mode-radio value for picking rows by hand.
pub const VALUE_MANUAL: &str = "manualSelection";

/// Режим массового проставления approve/reject радиокнопок
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalMode {
    Approve,
    Reject,
    Pending,
    ManualSelection,
}

impl ApprovalMode {
    /// Parses a mode-radio value; anything unknown is rejected.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            VALUE_APPROVE => Some(Self::Approve),
            VALUE_REJECT => Some(Self::Reject),
            VALUE_PENDING => Some(Self::Pending),
            VALUE_MANUAL => Some(Self::ManualSelection),
            _ => None,
        }
    }

    /// The per-row value one pass of this mode checks everywhere. Manual
    /// selection resets every row to the pending baseline and then leaves
    /// the rows to the user, so switching modes never keeps a stale mix
    /// of the previous mode's values.
    pub fn forced_value(self) -> &'static str {
        match self {
            Self::Approve => VALUE_APPROVE,
            Self::Reject => VALUE_REJECT,
            Self::Pending | Self::ManualSelection => VALUE_PENDING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(ApprovalMode::from_value("approve"), Some(ApprovalMode::Approve));
        assert_eq!(ApprovalMode::from_value("reject"), Some(ApprovalMode::Reject));
        assert_eq!(ApprovalMode::from_value("pending"), Some(ApprovalMode::Pending));
        assert_eq!(
            ApprovalMode::from_value("manualSelection"),
            Some(ApprovalMode::ManualSelection)
        );
        assert_eq!(ApprovalMode::from_value("Approve"), None);
        assert_eq!(ApprovalMode::from_value(""), None);
    }

    #[test]
    fn test_forced_value() {
        assert_eq!(ApprovalMode::Approve.forced_value(), "approve");
        assert_eq!(ApprovalMode::Reject.forced_value(), "reject");
        assert_eq!(ApprovalMode::Pending.forced_value(), "pending");
        assert_eq!(ApprovalMode::ManualSelection.forced_value(), "pending");
    }
}
