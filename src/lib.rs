//! Kana composition engine.
//!
//! The transliterator and candidate utilities live in [`kana_core`], the
//! composition state machine in [`kana_session`]. This crate adds the
//! dictionary gateways, the background lookup worker and [`ComposeSession`],
//! which ties them together.

mod async_worker;
mod compose;
pub mod gateway;
mod trace_init;

pub use async_worker::{LookupResult, LookupWorker};
pub use compose::ComposeSession;
pub use gateway::{CandidateGateway, GatewayError, JishoGateway, StaticGateway};
pub use trace_init::init_tracing;

pub use kana_core::candidates::Candidate;
pub use kana_session::{
    HostField, InputSession, InputSurface, KeyEvent, KeyResponse, LookupRequest,
    PlatformCapability, ScriptForm, TextField,
};
