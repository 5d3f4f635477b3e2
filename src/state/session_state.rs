// ============================================================================
// SESSION STATE - Última sesión observada por la UI
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Modo de la pantalla según la sesión
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    SignedOut,
    SignedIn { account_id: String },
}

impl SessionStatus {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionStatus::SignedIn { .. })
    }
}

/// Estado de sesión tal como lo vio la UI la última vez
#[derive(Clone)]
pub struct SessionState {
    pub status: Rc<RefCell<SessionStatus>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status: Rc::new(RefCell::new(SessionStatus::SignedOut)),
        }
    }

    pub fn get_status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    /// Guardar nuevo estado; devuelve `true` si cambió
    pub fn replace_status(&self, status: SessionStatus) -> bool {
        let mut current = self.status.borrow_mut();
        if *current == status {
            return false;
        }
        *current = status;
        true
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
