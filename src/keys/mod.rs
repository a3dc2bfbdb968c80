pub mod binding;
pub mod event;
pub mod keymap;

pub use binding::BindingDescriptor;
pub use event::KeyEvent;
pub use keymap::{Action, Keymap, KeymapConfig};
