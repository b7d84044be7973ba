//! Port trait definitions (Hexagonal Architecture)
//!
//! The engine only ever produces text through `GenerationHooks`. Canned
//! templates, model-backed generators and test doubles all plug in here.

pub mod generation_hooks;

pub use generation_hooks::GenerationHooks;
