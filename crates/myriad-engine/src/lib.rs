//! Operation dispatcher for the Myriad decimal word engine.
//!
//! [`Engine`] sequences one compute request through its three phases:
//! decode both operands into a fresh arena, run the requested operation
//! through the kernel seam, and stringify the signed, normalized
//! result. Requests are synchronous and independent; each owns its own
//! arena and either completes or fails immediately (no retries, no
//! partial results).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod dispatch;
mod op;

pub use config::EngineConfig;
pub use dispatch::Engine;
pub use op::Op;
