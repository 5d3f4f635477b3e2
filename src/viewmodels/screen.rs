// ============================================================================
// SCREEN - Modelo derivado que consumen las views
// ============================================================================

use crate::models::PropRecord;
use crate::state::{SessionStatus, ViewState};

/// Qué pantalla mostrar y con qué datos
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    SignedOut,
    SignedIn(SignedInScreen),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignedInScreen {
    pub account_id: String,
    pub form_disabled: bool,
    pub records: Vec<PropRecord>,
    pub load_error: Option<String>,
}

impl Screen {
    pub fn derive(status: &SessionStatus, state: &ViewState) -> Self {
        match status {
            SessionStatus::SignedOut => Screen::SignedOut,
            SessionStatus::SignedIn { account_id } => Screen::SignedIn(SignedInScreen {
                account_id: account_id.clone(),
                form_disabled: !state.form_enabled(),
                records: state.recent_records(),
                load_error: state.load_error(),
            }),
        }
    }
}

impl SignedInScreen {
    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.account_id)
    }

    /// Líneas "X gave Y props for: msg" en orden de llegada
    pub fn summaries(&self) -> Vec<String> {
        self.records.iter().map(PropRecord::summary).collect()
    }
}
