//! Profile data types and profile-to-UMF mappers.
//!
//! The profiling engine itself is an external collaborator; this crate
//! only defines the serialized profile shape it hands over and the pure
//! mappings from that shape into UMF documents.

pub mod mapper;
pub mod types;

pub use mapper::{enrich_umf_with_profiling, umf_from_profile, PROFILER_TOOL};
pub use types::{ColumnProfile, DataFrameProfile};
