use serde::{Deserialize, Serialize};

/// Lifecycle status shared by every document-style resource.
///
/// The backend is the authority on transition validity; the front-end only
/// uses `available_transitions` to decide which buttons to offer for the
/// current state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
    /// Value this build does not know about. Kept verbatim so newer backend
    /// statuses display and round-trip without data loss.
    Other(String),
}

impl DocumentStatus {
    /// Wire code of the status
    pub fn code(&self) -> &str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Cancelled => "cancelled",
            DocumentStatus::Other(raw) => raw,
        }
    }

    /// Parse a wire code. Never fails: unknown codes land in `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => DocumentStatus::Pending,
            "approved" => DocumentStatus::Approved,
            "completed" => DocumentStatus::Completed,
            "cancelled" => DocumentStatus::Cancelled,
            other => DocumentStatus::Other(other.to_string()),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            DocumentStatus::Pending => "Pendiente",
            DocumentStatus::Approved => "Aprobado",
            DocumentStatus::Completed => "Completado",
            DocumentStatus::Cancelled => "Anulado",
            DocumentStatus::Other(raw) => raw,
        }
    }

    /// Badge variant for the status ("warning", "primary", "success",
    /// "error"; unknown values fall back to "neutral").
    pub fn badge_variant(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "warning",
            DocumentStatus::Approved => "primary",
            DocumentStatus::Completed => "success",
            DocumentStatus::Cancelled => "error",
            DocumentStatus::Other(_) => "neutral",
        }
    }

    /// Label of the button that moves a document *into* this status
    pub fn action_label(&self) -> &str {
        match self {
            DocumentStatus::Pending => "Reabrir",
            DocumentStatus::Approved => "Aprobar",
            DocumentStatus::Completed => "Completar",
            DocumentStatus::Cancelled => "Anular",
            DocumentStatus::Other(raw) => raw,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Completed | DocumentStatus::Cancelled
        )
    }

    /// Transitions the UI may offer from the current state.
    ///
    /// pending -> {approved, cancelled}; approved -> {completed, cancelled};
    /// terminal states offer nothing. Unknown statuses offer nothing either,
    /// since we cannot know where the backend allows them to go.
    pub fn available_transitions(&self) -> Vec<DocumentStatus> {
        match self {
            DocumentStatus::Pending => {
                vec![DocumentStatus::Approved, DocumentStatus::Cancelled]
            }
            DocumentStatus::Approved => {
                vec![DocumentStatus::Completed, DocumentStatus::Cancelled]
            }
            _ => Vec::new(),
        }
    }

    /// The four known statuses, in lifecycle order
    pub fn all() -> Vec<DocumentStatus> {
        vec![
            DocumentStatus::Pending,
            DocumentStatus::Approved,
            DocumentStatus::Completed,
            DocumentStatus::Cancelled,
        ]
    }
}

impl From<String> for DocumentStatus {
    fn from(s: String) -> Self {
        DocumentStatus::from_code(&s)
    }
}

impl From<DocumentStatus> for String {
    fn from(s: DocumentStatus) -> Self {
        s.code().to_string()
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Body of a `PUT /{resource}/{id}` that only moves the status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: DocumentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_offers_approve_and_cancel() {
        assert_eq!(
            DocumentStatus::Pending.available_transitions(),
            vec![DocumentStatus::Approved, DocumentStatus::Cancelled]
        );
    }

    #[test]
    fn test_approved_offers_complete_and_cancel() {
        assert_eq!(
            DocumentStatus::Approved.available_transitions(),
            vec![DocumentStatus::Completed, DocumentStatus::Cancelled]
        );
    }

    #[test]
    fn test_terminal_states_offer_nothing() {
        assert!(DocumentStatus::Completed.available_transitions().is_empty());
        assert!(DocumentStatus::Cancelled.available_transitions().is_empty());
        assert!(DocumentStatus::Completed.is_terminal());
        assert!(DocumentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_unknown_status_roundtrips_verbatim() {
        let status: DocumentStatus = serde_json::from_str("\"in_review\"").unwrap();
        assert_eq!(status, DocumentStatus::Other("in_review".into()));
        assert_eq!(status.label(), "in_review");
        assert_eq!(status.badge_variant(), "neutral");
        assert!(status.available_transitions().is_empty());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"in_review\"");
    }

    #[test]
    fn test_known_codes_parse() {
        for status in DocumentStatus::all() {
            assert_eq!(DocumentStatus::from_code(status.code()), status);
        }
    }
}
