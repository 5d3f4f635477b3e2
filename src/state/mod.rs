// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod session_state;
pub mod view_state;

pub use session_state::*;
pub use view_state::*;
