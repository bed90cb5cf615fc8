use databricks_tfschema::binding::{
    export_schema_to_registry, generate_module_tree, generate_serde, read_tf_schema_from_file,
};
use databricks_tfschema::config::CodeGeneratorConfig;
use databricks_tfschema::emit::rust_field_name;
use serde_reflection::{ContainerFormat, Format};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const PROVIDER_SCHEMA: &str = "./schema/databricks-provider-schema.json";
const MODEL_DIR: &str = "./src/schema";

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_checked_in_model_is_up_to_date() {
    let config = CodeGeneratorConfig::new("schema".to_string())
        .with_float_attributes(vec!["spot_bid_max_price"]);
    let schema = read_tf_schema_from_file(PROVIDER_SCHEMA).unwrap();
    let registry = export_schema_to_registry(&schema, &config).unwrap();

    let dir = tempdir().unwrap();
    let written = generate_module_tree(&config, dir.path(), &registry).unwrap();
    assert_eq!(written.len(), file_names(dir.path()).len());
    assert_eq!(file_names(dir.path()), file_names(Path::new(MODEL_DIR)));

    for name in file_names(dir.path()) {
        let generated = fs::read_to_string(dir.path().join(&name)).unwrap();
        let checked_in = fs::read_to_string(Path::new(MODEL_DIR).join(&name)).unwrap();
        assert!(
            generated == checked_in,
            "src/schema/{} is stale, rerun tfbindgen",
            name
        );
    }
}

#[test]
fn test_catalogue_coverage() {
    let config = CodeGeneratorConfig::new("schema".to_string());
    let schema = read_tf_schema_from_file(PROVIDER_SCHEMA).unwrap();
    let registry = export_schema_to_registry(&schema, &config).unwrap();

    assert_eq!(registry.roots.resources.len(), 21);
    assert_eq!(registry.roots.data_sources.len(), 8);
    assert!(registry.roots.provider.is_some());
    for name in &["ResourceJobTask", "ResourceMountS3", "DataSourceNodeType"] {
        assert!(registry.get(name).is_some(), "missing {}", name);
    }
}

/// Field identifiers of `pub struct <name>` in `source`, each with its serde annotation line.
fn emitted_fields(source: &str, name: &str) -> BTreeMap<String, Option<String>> {
    let header = format!("pub struct {} {{\n", name);
    let start = source
        .find(&header)
        .unwrap_or_else(|| panic!("{} is not emitted", name))
        + header.len();
    // keep the header's newline so an empty body still ends at "\n}\n"
    let body = &source[start - 1..];
    let body = &body[..body.find("\n}\n").unwrap()];

    let mut fields = BTreeMap::new();
    let mut annotation = None;
    for line in body.lines() {
        let line = line.trim();
        if line.starts_with("#[serde(") {
            annotation = Some(line.to_string());
        } else if let Some(rest) = line.strip_prefix("pub ") {
            let ident = rest.split(':').next().unwrap().to_string();
            fields.insert(ident, annotation.take());
        }
    }
    fields
}

#[test]
fn test_every_record_follows_optionality_rules() {
    let config = CodeGeneratorConfig::new("schema".to_string());
    let schema = read_tf_schema_from_file(PROVIDER_SCHEMA).unwrap();
    let registry = export_schema_to_registry(&schema, &config).unwrap();

    let mut out = Vec::new();
    generate_serde(&config, &mut out, &registry).unwrap();
    let source = String::from_utf8(out).unwrap();

    let mut checked = 0;
    for ((_, name), format) in &registry.containers {
        let fields = match format {
            ContainerFormat::Struct(fields) => fields,
            other => panic!("{} is not a struct: {:?}", name, other),
        };
        let emitted = emitted_fields(&source, name);
        assert_eq!(emitted.len(), fields.len(), "field count of {}", name);

        for field in fields {
            let (ident, _) = rust_field_name(&field.name);
            let annotation = emitted
                .get(&ident)
                .unwrap_or_else(|| panic!("{}.{} is not emitted", name, field.name));
            let skipped = annotation
                .as_deref()
                .map_or(false, |a| a.contains("skip_serializing_if"));
            match field.value {
                Format::Option(_) => assert!(
                    annotation
                        .as_deref()
                        .map_or(false, |a| a.contains("skip_serializing_if = \"Option::is_none\"")),
                    "optional {}.{} must be skipped when unset",
                    name,
                    field.name
                ),
                _ => assert!(
                    !skipped,
                    "required {}.{} must always be emitted",
                    name, field.name
                ),
            }
            checked += 1;
        }
    }
    assert!(checked > 1000, "only {} fields checked", checked);
}
