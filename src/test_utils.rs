use crate::binding::{export_schema_to_registry, read_tf_schema_from_file, TerraformSchemaExport};
use crate::config::CodeGeneratorConfig;
use crate::emit::Registry;

/// Trimmed-down export of the Databricks provider schema used across tests.
pub const FIXTURE_SCHEMA: &str = "./tests/fixtures/test-provider-schema.json";

pub fn fixture_config() -> CodeGeneratorConfig {
    CodeGeneratorConfig::new("schema".to_string()).with_float_attributes(vec!["spot_bid_max_price"])
}

pub fn fixture_schema() -> TerraformSchemaExport {
    read_tf_schema_from_file(FIXTURE_SCHEMA).expect("fixture schema must be readable")
}

pub fn fixture_registry() -> Registry {
    export_schema_to_registry(&fixture_schema(), &fixture_config())
        .expect("fixture schema must export")
}
