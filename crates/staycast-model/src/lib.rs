//! Core data model for the Staycast prediction pipeline.
//!
//! This crate is the leaf of the workspace: the schema description a trained
//! classifier expects ([`SchemaSpec`]), the per-request input record
//! ([`RawRecord`]), the aligned feature vector handed to the classifier
//! ([`AlignedVector`]), and the scoring boundary ([`Classifier`]).

pub mod error;
pub mod prediction;
pub mod record;
pub mod schema;

pub use error::{ClassifyError, SchemaError};
pub use prediction::{Classifier, Outcome, Prediction};
pub use record::{AlignedVector, FieldValue, RawRecord};
pub use schema::SchemaSpec;
