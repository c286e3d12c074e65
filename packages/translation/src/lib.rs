//! # Fluent Translation
//!
//! Delivers translation synthesis events to application listeners.
//!
//! A [`SynthesisEmitter`] owns one session's id and configuration and
//! publishes every synthesized audio frame on a shared
//! [`SynthesisEventBus`]. Listeners receive the event payloads defined
//! in [`fluent_translation_domain`].

pub mod emitter;
pub mod event_bus;
pub mod telemetry;

pub use emitter::SynthesisEmitter;
pub use event_bus::{BoxFuture, ListenerId, SynthesisEventBus, SynthesisHandler};
pub use telemetry::init_tracing;

pub use fluent_translation_domain as domain;
pub use fluent_translation_domain::prelude;
