use crate::config::CodeGeneratorConfig;
use crate::emit::{rust_field_name, CodeGenerator, Registry, RootMember};
use crate::error::{BindgenError, Result};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_reflection::{ContainerFormat, Format, Named};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TerraformSchemaExport {
    pub provider_schemas: BTreeMap<String, Schema>,
    pub format_version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Schema {
    pub provider: SchemaItem,
    pub data_source_schemas: Option<BTreeMap<String, SchemaItem>>,
    pub resource_schemas: Option<BTreeMap<String, SchemaItem>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SchemaItem {
    pub version: i64,
    pub block: Block,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Block {
    pub attributes: Option<BTreeMap<String, Attribute>>,
    pub block_types: Option<BTreeMap<String, NestedBlock>>,
    pub description: Option<String>,
    pub description_kind: Option<StringKind>,
    pub deprecated: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "lowercase")]
pub enum StringKind {
    Plain,
    Markdown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    Single,
    Group,
    List,
    Set,
    Map,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Attribute {
    pub r#type: Option<AttributeType>,
    pub nested_type: Option<NestedType>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub optional: Option<bool>,
    pub computed: Option<bool>,
    pub sensitive: Option<bool>,
    pub description_kind: Option<StringKind>,
    pub deprecated: Option<bool>,
}

/// Attribute types introduced by the plugin framework (protocol 6).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NestedType {
    pub attributes: BTreeMap<String, Attribute>,
    pub nesting_mode: NestingMode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NestedBlock {
    pub block: Block,
    pub nesting_mode: Option<NestingMode>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

/// cty type expression, e.g. `"string"` or `["map", "string"]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AttributeType(pub Value);

pub fn generate_serde(
    config: &CodeGeneratorConfig,
    out: &mut dyn Write,
    registry: &Registry,
) -> Result<()> {
    let mut config = config.clone();
    config.merge_comments(registry.comments.clone());

    CodeGenerator::new(&config).output(out, registry)
}

pub fn generate_module_tree(
    config: &CodeGeneratorConfig,
    dir: &Path,
    registry: &Registry,
) -> Result<Vec<PathBuf>> {
    let mut config = config.clone();
    config.merge_comments(registry.comments.clone());

    CodeGenerator::new(&config).output_module_tree(dir, registry)
}

/// Lower the schema of the configured provider into a registry of record definitions.
pub fn export_schema_to_registry(
    schema: &TerraformSchemaExport,
    config: &CodeGeneratorConfig,
) -> Result<Registry> {
    let (address, provider) = find_provider(schema, config.provider_source())?;
    let provider_name = address.rsplit('/').next().unwrap_or(address);
    let prefix = format!("{}_", provider_name);
    info!(provider = address, "exporting provider schema");

    let mut exporter = Exporter::new(config);

    exporter.export_block("config", "Config", &provider.provider.block)?;
    exporter.registry.roots.provider = Some(RootMember {
        wire_name: provider_name.to_string(),
        field_name: rust_field_name(provider_name).0,
        type_name: "Config".to_string(),
        module: "config".to_string(),
    });

    if let Some(rss) = &provider.resource_schemas {
        for (n, i) in rss {
            let short = n.strip_prefix(&prefix).unwrap_or(n);
            let member = root_member(n, short, "Resource", "resource");

            // add terraform meta-arguments to block
            let mut b = i.block.clone();
            inject_meta_arguments(&mut b);

            exporter.export_block(&member.module, &member.type_name, &b)?;
            exporter.registry.roots.resources.push(member);
        }
    }

    if let Some(dss) = &provider.data_source_schemas {
        for (n, i) in dss {
            let short = n.strip_prefix(&prefix).unwrap_or(n);
            let member = root_member(n, short, "DataSource", "data_source");
            exporter.export_block(&member.module, &member.type_name, &i.block)?;
            exporter.registry.roots.data_sources.push(member);
        }
    }

    info!(
        records = exporter.registry.len(),
        resources = exporter.registry.roots.resources.len(),
        data_sources = exporter.registry.roots.data_sources.len(),
        "exported provider schema"
    );
    Ok(exporter.registry)
}

fn find_provider<'s>(
    schema: &'s TerraformSchemaExport,
    source: &str,
) -> Result<(&'s str, &'s Schema)> {
    let suffix = format!("/{}", source);
    schema
        .provider_schemas
        .iter()
        .find(|(address, _)| *address == source || address.ends_with(&suffix))
        .map(|(address, schema)| (address.as_str(), schema))
        .ok_or_else(|| BindgenError::MissingProvider(source.to_string()))
}

fn root_member(wire_name: &str, short: &str, type_prefix: &str, module_prefix: &str) -> RootMember {
    RootMember {
        wire_name: wire_name.to_string(),
        field_name: rust_field_name(short).0,
        type_name: format!("{}{}", type_prefix, pascal(short)),
        module: format!("{}_{}", module_prefix, short),
    }
}

fn pascal(name: &str) -> String {
    name.from_case(Case::Snake).to_case(Case::Pascal)
}

struct Exporter<'a> {
    config: &'a CodeGeneratorConfig,
    registry: Registry,
    type_names: BTreeSet<String>,
    namespace: Vec<String>,
}

impl<'a> Exporter<'a> {
    fn new(config: &'a CodeGeneratorConfig) -> Self {
        let namespace = config
            .module_name
            .split('.')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self {
            config,
            registry: Registry::new(),
            type_names: BTreeSet::new(),
            namespace,
        }
    }

    fn insert(&mut self, module: &str, type_name: &str, fields: Vec<Named<Format>>) -> Result<()> {
        if !self.type_names.insert(type_name.to_string()) {
            return Err(BindgenError::DuplicateType(type_name.to_string()));
        }
        // distinct schema keys may sanitize to the same identifier
        let mut idents = BTreeMap::new();
        for field in &fields {
            let (ident, _) = rust_field_name(&field.name);
            if let Some(other) = idents.insert(ident.clone(), field.name.clone()) {
                return Err(BindgenError::DuplicateField(format!(
                    "{}.{} ({} and {})",
                    type_name, ident, other, field.name
                )));
            }
        }
        self.registry.containers.insert(
            (module.to_string(), type_name.to_string()),
            ContainerFormat::Struct(fields),
        );
        Ok(())
    }

    fn record_comment(&mut self, path: &[&str], description: Option<&str>) {
        if !self.config.with_descriptions {
            return;
        }
        if let Some(text) = description.map(str::trim).filter(|t| !t.is_empty()) {
            let mut key = self.namespace.clone();
            key.extend(path.iter().map(|s| s.to_string()));
            self.registry.comments.insert(key, text.to_string());
        }
    }

    fn export_block(&mut self, module: &str, type_name: &str, blk: &Block) -> Result<()> {
        debug!(module, type_name, "exporting block");
        self.record_comment(&[type_name], blk.description.as_deref());

        let mut fields = Vec::new();
        if let Some(attrs) = &blk.attributes {
            for (an, at) in attrs {
                let value = self.export_attribute(module, type_name, an, at)?;
                self.record_comment(&[type_name, an], at.description.as_deref());
                fields.push(Named {
                    name: an.to_string(),
                    value,
                });
            }
        }
        if let Some(bt) = &blk.block_types {
            for (block_type_name, nested_block) in bt {
                let value = self.export_block_type(module, type_name, block_type_name, nested_block)?;
                self.record_comment(
                    &[type_name, block_type_name],
                    nested_block.block.description.as_deref(),
                );
                fields.push(Named {
                    name: block_type_name.to_string(),
                    value,
                });
            }
        }

        self.insert(module, type_name, fields)
    }

    fn export_attribute(
        &mut self,
        module: &str,
        owner: &str,
        name: &str,
        at: &Attribute,
    ) -> Result<Format> {
        let f = match (&at.nested_type, &at.r#type) {
            (Some(nested), _) => self.export_nested_type(module, owner, name, nested)?,
            (None, Some(AttributeType(t))) => self.lower_type(module, owner, name, t)?,
            (None, None) => {
                return Err(BindgenError::MalformedType(format!(
                    "attribute {}.{} has no type",
                    owner, name
                )))
            }
        };
        let attr_fmt = match (at.optional, at.computed) {
            (Some(opt), _) if opt => Format::Option(Box::new(f)),
            (_, Some(cmp)) if cmp => Format::Option(Box::new(f)),
            _ => f,
        };
        Ok(attr_fmt)
    }

    fn lower_primitive(&self, owner: &str, name: &str, t: &str) -> Result<Format> {
        match t {
            "string" => Ok(Format::Str),
            "bool" => Ok(Format::Bool),
            "number" if self.config.is_float_attribute(name) => Ok(Format::F64),
            "number" => Ok(Format::I64),
            "dynamic" => Ok(Format::TypeName("Value".to_string())),
            other => Err(BindgenError::UnsupportedType(format!(
                "{} in {}.{}",
                other, owner, name
            ))),
        }
    }

    fn lower_type(&mut self, module: &str, owner: &str, name: &str, t: &Value) -> Result<Format> {
        match t {
            Value::String(t) => self.lower_primitive(owner, name, t),
            Value::Array(parts) => {
                let kind = parts.first().and_then(Value::as_str).ok_or_else(|| {
                    BindgenError::MalformedType(format!("{}.{}: {}", owner, name, t))
                })?;
                let elem = parts.get(1).ok_or_else(|| {
                    BindgenError::MalformedType(format!(
                        "{} of {}.{} has no element type",
                        kind, owner, name
                    ))
                })?;
                match kind {
                    "list" | "set" => Ok(Format::Seq(Box::new(
                        self.lower_type(module, owner, name, elem)?,
                    ))),
                    "map" => Ok(Format::Map {
                        key: Box::new(Format::Str),
                        value: Box::new(self.lower_type(module, owner, name, elem)?),
                    }),
                    "object" => self.export_object(module, owner, name, elem),
                    "tuple" => Ok(Format::Seq(Box::new(Format::TypeName("Value".to_string())))),
                    other => Err(BindgenError::UnsupportedType(format!(
                        "{} in {}.{}",
                        other, owner, name
                    ))),
                }
            }
            unknown => Err(BindgenError::UnsupportedType(format!(
                "{} in {}.{}",
                unknown, owner, name
            ))),
        }
    }

    /// Object attributes get a record of their own, with every member optional.
    fn export_object(&mut self, module: &str, owner: &str, name: &str, members: &Value) -> Result<Format> {
        let members = members.as_object().ok_or_else(|| {
            BindgenError::MalformedType(format!("object {}.{}: {}", owner, name, members))
        })?;
        let type_name = format!("{}{}", owner, pascal(name));
        let sorted: BTreeMap<&String, &Value> = members.iter().collect();
        let mut fields = Vec::new();
        for (mn, mt) in sorted {
            let f = self.lower_type(module, &type_name, mn, mt)?;
            fields.push(Named {
                name: mn.to_string(),
                value: Format::Option(Box::new(f)),
            });
        }
        self.insert(module, &type_name, fields)?;
        Ok(Format::TypeName(type_name))
    }

    fn export_nested_type(
        &mut self,
        module: &str,
        owner: &str,
        name: &str,
        nested: &NestedType,
    ) -> Result<Format> {
        let type_name = format!("{}{}", owner, pascal(name));
        let blk = Block {
            attributes: Some(nested.attributes.clone()),
            ..Default::default()
        };
        self.export_block(module, &type_name, &blk)?;
        let inner = Format::TypeName(type_name);
        Ok(match nested.nesting_mode {
            NestingMode::Single | NestingMode::Group => inner,
            NestingMode::List | NestingMode::Set => Format::Seq(Box::new(inner)),
            NestingMode::Map => Format::Map {
                key: Box::new(Format::Str),
                value: Box::new(inner),
            },
        })
    }

    fn export_block_type(
        &mut self,
        module: &str,
        owner: &str,
        name: &str,
        blk: &NestedBlock,
    ) -> Result<Format> {
        let type_name = format!("{}{}", owner, pascal(name));
        self.export_block(module, &type_name, &blk.block)?;

        let inner = Format::TypeName(type_name);
        let f = match blk.nesting_mode.unwrap_or(NestingMode::List) {
            NestingMode::Single | NestingMode::Group => inner,
            NestingMode::List | NestingMode::Set if blk.max_items == Some(1) => inner,
            NestingMode::List | NestingMode::Set => Format::Seq(Box::new(inner)),
            NestingMode::Map => Format::Map {
                key: Box::new(Format::Str),
                value: Box::new(inner),
            },
        };
        if blk.min_items.unwrap_or(0) > 0 {
            Ok(f)
        } else {
            Ok(Format::Option(Box::new(f)))
        }
    }
}

fn inject_meta_arguments(blk: &mut Block) {
    let depends_on_attr = Attribute {
        r#type: Some(AttributeType(serde_json::json!(["list", "string"]))),
        optional: Some(true),
        ..Default::default()
    };
    let count_attr = Attribute {
        r#type: Some(AttributeType(serde_json::json!("number"))),
        optional: Some(true),
        ..Default::default()
    };

    // for_each takes either a map or a set of strings
    let for_each_attr = Attribute {
        r#type: Some(AttributeType(serde_json::json!("dynamic"))),
        optional: Some(true),
        ..Default::default()
    };

    let provider_attr = Attribute {
        r#type: Some(AttributeType(serde_json::json!("string"))),
        optional: Some(true),
        ..Default::default()
    };

    let attrs = blk.attributes.get_or_insert_with(BTreeMap::new);
    for (name, attr) in vec![
        ("depends_on", depends_on_attr),
        ("count", count_attr),
        ("for_each", for_each_attr),
        ("provider", provider_attr),
    ] {
        attrs.entry(name.to_owned()).or_insert(attr);
    }
}

pub fn read_tf_schema<R: Read>(reader: R) -> Result<TerraformSchemaExport> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_tf_schema_from_file<P: AsRef<Path>>(path: P) -> Result<TerraformSchemaExport> {
    // Open the file in read-only mode with buffer.
    let file = File::open(path)?;
    read_tf_schema(BufReader::new(file))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{fixture_config, fixture_schema, FIXTURE_SCHEMA};

    fn export_one(attrs: Value) -> Result<Registry> {
        let schema: TerraformSchemaExport = serde_json::from_value(serde_json::json!({
            "format_version": "1.0",
            "provider_schemas": {
                "registry.terraform.io/databricks/databricks": {
                    "provider": { "version": 0, "block": {} },
                    "resource_schemas": {
                        "databricks_thing": { "version": 0, "block": attrs }
                    }
                }
            }
        }))
        .unwrap();
        export_schema_to_registry(&schema, &fixture_config())
    }

    fn fields(registry: &Registry, type_name: &str) -> BTreeMap<String, Format> {
        match registry.get(type_name) {
            Some(ContainerFormat::Struct(fields)) => fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
            other => panic!("{} is not a struct: {:?}", type_name, other),
        }
    }

    fn opt(f: Format) -> Format {
        Format::Option(Box::new(f))
    }

    #[test]
    fn test_deserialize_example_tf_schema() {
        let tf_schema = read_tf_schema_from_file(FIXTURE_SCHEMA);

        assert!(tf_schema.is_ok());
        let tf_schema = tf_schema.unwrap();
        let test_schema = tf_schema
            .provider_schemas
            .get("registry.terraform.io/databricks/databricks");

        assert_eq!(tf_schema.provider_schemas.len(), 1);
        assert!(test_schema.is_some());
        assert_eq!(
            test_schema
                .unwrap()
                .data_source_schemas
                .as_ref()
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            test_schema.map(|x| x.resource_schemas.as_ref().map(|r| r.len())),
            Some(Some(4))
        );
    }

    #[test]
    fn test_missing_schema_file() {
        let res = read_tf_schema_from_file("./tests/fixtures/does-not-exist.json");
        assert!(matches!(res, Err(BindgenError::Io(_))));
    }

    #[test]
    fn test_generate_registry_from_schema() {
        let registry = export_schema_to_registry(&fixture_schema(), &fixture_config()).unwrap();

        assert_eq!(registry.len(), 18);
        assert_eq!(registry.roots.resources.len(), 4);
        assert_eq!(registry.roots.data_sources.len(), 2);
        assert_eq!(
            registry.roots.provider.as_ref().map(|p| p.type_name.as_str()),
            Some("Config")
        );
        let cluster = registry
            .roots
            .resources
            .iter()
            .find(|r| r.wire_name == "databricks_cluster")
            .unwrap();
        assert_eq!(cluster.field_name, "cluster");
        assert_eq!(cluster.type_name, "ResourceCluster");
        assert_eq!(cluster.module, "resource_cluster");
        assert!(registry
            .containers
            .contains_key(&("resource_cluster".to_string(), "ResourceClusterLibraryPypi".to_string())));
    }

    #[test]
    fn test_missing_provider() {
        let config = fixture_config().with_provider_source("acme/widgets".to_string());
        let res = export_schema_to_registry(&fixture_schema(), &config);
        assert!(matches!(res, Err(BindgenError::MissingProvider(ref s)) if s == "acme/widgets"));
    }

    #[test]
    fn test_attribute_type_mapping() {
        let registry = export_one(serde_json::json!({
            "attributes": {
                "name": { "type": "string", "required": true },
                "size": { "type": "number", "optional": true },
                "spot_bid_max_price": { "type": "number", "optional": true },
                "enabled": { "type": "bool", "computed": true },
                "tags": { "type": ["map", "string"], "optional": true },
                "params": { "type": ["map", "dynamic"], "optional": true },
                "ids": { "type": ["set", "number"], "required": true },
                "type": { "type": "string", "optional": true }
            }
        }))
        .unwrap();
        let f = fields(&registry, "ResourceThing");

        assert_eq!(f["name"], Format::Str);
        assert_eq!(f["size"], opt(Format::I64));
        assert_eq!(f["spot_bid_max_price"], opt(Format::F64));
        assert_eq!(f["enabled"], opt(Format::Bool));
        assert_eq!(
            f["tags"],
            opt(Format::Map {
                key: Box::new(Format::Str),
                value: Box::new(Format::Str)
            })
        );
        assert_eq!(
            f["params"],
            opt(Format::Map {
                key: Box::new(Format::Str),
                value: Box::new(Format::TypeName("Value".to_string()))
            })
        );
        assert_eq!(f["ids"], Format::Seq(Box::new(Format::I64)));
        assert_eq!(f["type"], opt(Format::Str));
        // meta-arguments
        assert_eq!(f["count"], opt(Format::I64));
        assert_eq!(f["depends_on"], opt(Format::Seq(Box::new(Format::Str))));
    }

    #[test]
    fn test_object_and_nested_type_attributes() {
        let registry = export_one(serde_json::json!({
            "attributes": {
                "status": {
                    "type": ["object", { "state": "string", "message": "string" }],
                    "computed": true
                },
                "endpoints": {
                    "nested_type": {
                        "attributes": {
                            "url": { "type": "string", "required": true }
                        },
                        "nesting_mode": "list"
                    },
                    "optional": true
                }
            }
        }))
        .unwrap();
        let f = fields(&registry, "ResourceThing");
        assert_eq!(
            f["status"],
            opt(Format::TypeName("ResourceThingStatus".to_string()))
        );
        assert_eq!(
            f["endpoints"],
            opt(Format::Seq(Box::new(Format::TypeName(
                "ResourceThingEndpoints".to_string()
            ))))
        );
        let status = fields(&registry, "ResourceThingStatus");
        assert_eq!(status["message"], opt(Format::Str));
        let endpoints = fields(&registry, "ResourceThingEndpoints");
        assert_eq!(endpoints["url"], Format::Str);
    }

    #[test]
    fn test_block_nesting_modes() {
        let leaf = serde_json::json!({ "attributes": { "v": { "type": "string", "optional": true } } });
        let registry = export_one(serde_json::json!({
            "attributes": {},
            "block_types": {
                "single": { "nesting_mode": "list", "max_items": 1, "block": leaf },
                "many": { "nesting_mode": "set", "block": leaf },
                "keyed": { "nesting_mode": "map", "block": leaf },
                "needed": { "nesting_mode": "list", "min_items": 1, "max_items": 1, "block": leaf },
                "grouped": { "nesting_mode": "single", "block": leaf }
            }
        }))
        .unwrap();
        let f = fields(&registry, "ResourceThing");
        let ty = |n: &str| Format::TypeName(format!("ResourceThing{}", n));

        assert_eq!(f["single"], opt(ty("Single")));
        assert_eq!(f["many"], opt(Format::Seq(Box::new(ty("Many")))));
        assert_eq!(
            f["keyed"],
            opt(Format::Map {
                key: Box::new(Format::Str),
                value: Box::new(ty("Keyed"))
            })
        );
        assert_eq!(f["needed"], ty("Needed"));
        assert_eq!(f["grouped"], opt(ty("Grouped")));
    }

    #[test]
    fn test_unsupported_types() {
        let res = export_one(serde_json::json!({
            "attributes": { "x": { "type": "capsule", "optional": true } }
        }));
        assert!(matches!(res, Err(BindgenError::UnsupportedType(_))));

        let res = export_one(serde_json::json!({
            "attributes": { "x": { "type": ["list"], "optional": true } }
        }));
        assert!(matches!(res, Err(BindgenError::MalformedType(_))));

        let res = export_one(serde_json::json!({
            "attributes": { "x": { "optional": true } }
        }));
        assert!(matches!(res, Err(BindgenError::MalformedType(_))));
    }

    #[test]
    fn test_duplicate_types() {
        let schema: TerraformSchemaExport = serde_json::from_value(serde_json::json!({
            "format_version": "1.0",
            "provider_schemas": {
                "registry.terraform.io/databricks/databricks": {
                    "provider": { "version": 0, "block": {} },
                    "resource_schemas": {
                        "databricks_job": { "version": 0, "block": {} },
                        "job": { "version": 0, "block": {} }
                    }
                }
            }
        }))
        .unwrap();
        let res = export_schema_to_registry(&schema, &fixture_config());
        assert!(matches!(res, Err(BindgenError::DuplicateType(ref t)) if t == "ResourceJob"));
    }

    #[test]
    fn test_duplicate_fields() {
        let res = export_one(serde_json::json!({
            "attributes": {
                "a-b": { "type": "string", "optional": true },
                "a_b": { "type": "string", "optional": true }
            }
        }));
        assert!(
            matches!(res, Err(BindgenError::DuplicateField(ref f)) if f == "ResourceThing.a_b (a-b and a_b)")
        );

        let res = export_one(serde_json::json!({
            "attributes": {
                "status": {
                    "type": ["object", { "x.y": "string", "x_y": "string" }],
                    "computed": true
                }
            }
        }));
        assert!(matches!(res, Err(BindgenError::DuplicateField(_))));

        let res = export_one(serde_json::json!({
            "attributes": {
                "self": { "type": "string", "optional": true },
                "self_": { "type": "string", "optional": true }
            }
        }));
        assert!(matches!(res, Err(BindgenError::DuplicateField(_))));
    }

    #[test]
    fn test_descriptions_become_comments() {
        let config = fixture_config().with_descriptions(true);
        let registry = export_schema_to_registry(&fixture_schema(), &config).unwrap();
        let key: Vec<String> = vec!["schema", "ResourceCluster", "spark_version"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            registry.comments.get(&key).map(String::as_str),
            Some("Runtime version of the cluster.")
        );

        let mut out = Vec::new();
        generate_serde(&config, &mut out, &registry).unwrap();
        let source = String::from_utf8(out).unwrap();
        assert!(source.contains("    /// Runtime version of the cluster.\n    pub spark_version: String,\n"));
    }

    #[test]
    fn test_descriptions_off_by_default() {
        let registry = export_schema_to_registry(&fixture_schema(), &fixture_config()).unwrap();
        assert!(registry.comments.is_empty());
    }
}
