pub mod display;
pub mod modal;

pub use display::{DisplayAction, DisplayState};
pub use modal::{MODAL_CLOSE_MS, ModalAction, ModalState};
