//! # vksc-pipeline-json: Vulkan SC pipeline capture
//!
//! Turns the configuration of a Vulkan SC pipeline into a canonical JSON
//! document and back, so pipelines can be compiled offline and replayed
//! deterministically, and tracks the per-device object counts a Vulkan SC
//! device has to reserve up front.
//!
//! ## Architecture
//!
//! - **Model**: one Rust type per API structure, with `pNext` chains as closed enums
//! - **Codec**: [`codec::Encoder`] / [`codec::Decoder`] walk the model and the JSON tree
//! - **Names**: [`names::NameRegistry`] maps shared handles to document-wide names
//! - **Document**: assembles and parses whole pipeline documents with their side tables
//! - **Capture**: records objects as they are created and flattens a pipeline's dependencies
//! - **Reservation**: lock-free high-water marks of live objects, per device
//!
//! ## Example
//!
//! ```ignore
//! use vksc_pipeline_json::document::{generate_pipeline_json, parse_pipeline_json};
//!
//! let parsed = parse_pipeline_json(&std::fs::read_to_string("pipeline.json")?)?;
//! for message in &parsed.messages {
//!     eprintln!("{}", message);
//! }
//! let text = generate_pipeline_json(&parsed.value, &Default::default())?.value;
//! ```

#![recursion_limit = "256"]

pub mod capture;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod names;
pub mod reservation;

// Re-export commonly used types
pub use capture::{ArtifactWriter, Capture, CaptureStore};
pub use codec::{generate_struct_json, parse_struct_json, Generated, Message, Severity};
pub use config::Settings;
pub use document::{
    generate_pipeline_json, parse_pipeline_json, GeneratorOptions, PipelineDocument,
    PipelineUuid, UuidMode,
};
pub use error::{PcJsonError, Result};
pub use names::NameRegistry;
pub use reservation::{ObjectEvent, ReservationSnapshot, ReservationTracker};
