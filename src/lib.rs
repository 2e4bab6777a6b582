//! Library entry for the guitar shop catalog, exposing the core for the binary and integration tests.

pub mod app;
pub mod events;
pub mod i18n;
pub mod logic;
pub mod sources;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
