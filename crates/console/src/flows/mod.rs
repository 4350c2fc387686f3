//! Interactive flows dispatched from the menu, one module per screen.

pub mod list;
pub mod register;
pub mod withdraw;
