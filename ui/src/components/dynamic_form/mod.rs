//! Schema-Driven Dynamic Form
//!
//! Renders one labeled control group per field descriptor, accumulates edits
//! into a `FormState` and hands that state to a callback on submit.

pub mod fields;
pub mod form;
pub mod layout;
pub mod state;

pub use form::DynamicForm;
pub use state::FormState;
