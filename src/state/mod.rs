// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod spawner;
pub mod session_state;

pub use reactivity::*;
pub use spawner::*;
pub use session_state::*;
