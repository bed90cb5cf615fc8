//! # Terraform Provider Schema to Serde code generator
//!
//! '''bash
//! terraform providers schema -json > provider-schema.json
//! cargo run --bin tfbindgen -- provider-schema.json --output-dir src/schema
//! '''

use databricks_tfschema::binding::{
    export_schema_to_registry, generate_module_tree, generate_serde, read_tf_schema_from_file,
};
use databricks_tfschema::config::CodeGeneratorConfig;
use databricks_tfschema::error::Result;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::{error, info};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Terraform schema to Serde transformer",
    about = "Generate code for Serde containers from Terraform provider schema"
)]
struct Options {
    /// Path to the JSON-encoded terraform schema.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Write one module per resource and data source into this directory instead
    /// of a single source on stdout.
    #[structopt(long, parse(from_os_str))]
    output_dir: Option<PathBuf>,

    /// Registry address of the provider to generate bindings for.
    #[structopt(long, default_value = "databricks/databricks")]
    provider_source: String,

    /// Provider version recorded in the generated `required_providers` block.
    #[structopt(long, default_value = "1.58.0")]
    provider_version: String,

    /// Additional attribute whose `number` type maps to `f64`. May be repeated;
    /// `spot_bid_max_price` is always included.
    #[structopt(long = "float-attribute", number_of_values = 1)]
    float_attributes: Vec<String>,

    /// Emit schema descriptions as doc comments.
    #[structopt(long)]
    with_descriptions: bool,
}

impl Options {
    fn config(&self) -> CodeGeneratorConfig {
        CodeGeneratorConfig::new("schema".to_string())
            .with_provider_source(self.provider_source.clone())
            .with_provider_version(self.provider_version.clone())
            .with_float_attributes(self.float_attributes.iter().cloned())
            .with_descriptions(self.with_descriptions)
    }
}

fn run(options: Options) -> Result<()> {
    let config = options.config();

    let schema = read_tf_schema_from_file(&options.input)?;
    info!(format_version = %schema.format_version, input = %options.input.display(), "loaded provider schema");
    let registry = export_schema_to_registry(&schema, &config)?;

    match options.output_dir {
        Some(dir) => {
            let written = generate_module_tree(&config, &dir, &registry)?;
            info!(files = written.len(), dir = %dir.display(), "generated module tree");
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            generate_serde(&config, &mut out, &registry)?;
        }
    }
    Ok(())
}

fn main() {
    // stdout carries the generated source
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let options = Options::from_args();
    if let Err(e) = run(options) {
        error!("Error generating serde model: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_float_attribute_before_input() {
        let options =
            Options::from_iter_safe(&["tfbindgen", "--float-attribute", "ratio", "in.json"]).unwrap();
        assert_eq!(options.input, PathBuf::from("in.json"));
        assert_eq!(options.float_attributes, vec!["ratio".to_string()]);
    }

    #[test]
    fn test_repeated_float_attributes_keep_default() {
        let options = Options::from_iter_safe(&[
            "tfbindgen",
            "in.json",
            "--float-attribute",
            "ratio",
            "--float-attribute",
            "weight",
        ])
        .unwrap();
        let config = options.config();
        for name in &["ratio", "weight", "spot_bid_max_price"] {
            assert!(config.is_float_attribute(name), "{} should be f64", name);
        }
    }

    #[test]
    fn test_defaults() {
        let options = Options::from_iter_safe(&["tfbindgen", "in.json"]).unwrap();
        assert_eq!(options.provider_source, "databricks/databricks");
        assert!(options.float_attributes.is_empty());
        assert!(options.output_dir.is_none());
        assert!(options.config().is_float_attribute("spot_bid_max_price"));
    }
}
