// ============================================================================
// STATE MODULE - Estado de página con Rc<RefCell>
// ============================================================================

pub mod board_state;
pub mod session_state;

pub use board_state::*;
pub use session_state::*;
