//! Typed serde bindings for the Databricks Terraform provider, and the generator that produces them.
//!
//! ## Quick Start
//!
//! The [`schema`] module mirrors the provider schema: one record per resource, data source and
//! nested block, plus the [`schema::Root`] document that Terraform reads as `*.tf.json`.
//! Required attributes are plain fields and are always written; optional ones are `Option`s
//! that disappear from the output when unset.
//!
//! ```
//! use databricks_tfschema::schema::{ResourceCluster, Root};
//!
//! let mut root = Root::new();
//! root.resource.cluster.insert(
//!     "example".to_string(),
//!     ResourceCluster {
//!         spark_version: "15.4.x-scala2.12".to_string(),
//!         num_workers: Some(2),
//!         ..Default::default()
//!     },
//! );
//!
//! let doc = serde_json::to_value(&root).unwrap();
//! let cluster = &doc["resource"]["databricks_cluster"]["example"];
//! assert_eq!(cluster["spark_version"], "15.4.x-scala2.12");
//! assert_eq!(cluster["num_workers"], 2);
//! assert_eq!(cluster.as_object().map(|o| o.len()), Some(2));
//! ```
//!
//! Blocks that hold exactly one of several alternatives also get an enum view in [`one_of`].
//!
//! ## Regenerating the bindings
//!
//! The checked-in model is produced by the `tfbindgen` binary from a provider schema export:
//!
//! ```bash
//! terraform providers schema -json > schema/databricks-provider-schema.json
//! cargo run --bin tfbindgen -- schema/databricks-provider-schema.json --output-dir src/schema
//! ```
//!
//! Without `--output-dir` the whole model is printed to stdout as a single module.
//! Other providers work the same way given `--provider-source`.

// registry creation
pub mod binding;

// code generator
pub mod emit;

// configuration support for code generation
pub mod config;

pub mod error;

// generated model
pub mod schema;

pub mod one_of;

/// Utility functions to help testing code generators.
#[doc(hidden)]
pub mod test_utils;
