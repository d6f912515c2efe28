//! FFI crate exposing the OPeach core to the mobile UI.

pub mod api;
