//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth card pieces and decorative chrome. Only `tabs`
//! shares state, through its own context; everything else takes props.

pub mod auth_alert;
pub mod border_beam;
pub mod form_field;
pub mod landing;
pub mod shine_border;
pub mod strength_meter;
pub mod tabs;
