//! Small rendering helpers shared by screens.

pub mod type_chips;
