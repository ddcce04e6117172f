//! # RecruitEM Core
//!
//! Domain types, traits, and error definitions for the RecruitEM
//! dispatcher. Nothing in here performs I/O: it defines the model that
//! the tools, providers and agents crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator is a trait here:
//! - [`Catalog`] for read-only job and assessment-link reference data
//! - [`Tool`] for the capabilities a specialist agent may call
//! - [`Provider`] for the optional generative-text backend
//!
//! Implementations live in their respective crates, so test doubles and
//! real backends are swapped by construction rather than by globals.

pub mod catalog;
pub mod error;
pub mod event;
pub mod provider;
pub mod state;
pub mod tips;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use catalog::{Catalog, JobRecord, StaticCatalog};
pub use error::{Error, Result};
pub use event::InputEvent;
pub use provider::{Provider, ProviderRequest, ProviderResponse};
pub use state::{AgentState, Route, Stage, Trace, TraceEntry};
pub use tips::{TipEntry, TipTable};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
