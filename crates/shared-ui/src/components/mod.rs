// Standalone components
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;

// Primitive wrappers
pub mod label;
pub mod toast;

// Depend on button
pub mod password_toggle;
pub mod sidebar;

pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use password_toggle::*;
pub use sidebar::*;
pub use toast::*;
