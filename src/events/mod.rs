//! Event types and observers.
//!
//! Events are triggered with `commands.trigger` / `world.trigger` and handled
//! by observers registered in `main`.
//!
//! Submodules:
//! - [`input`] – key actions and pet pokes
//! - [`pool`] – an entity was handed out by the object pool
//! - [`sequence`] – frame changes, loops and completions of sequence players
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod input;
pub mod pool;
pub mod sequence;
pub mod switchdebug;
