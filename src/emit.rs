// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

//!
//! Rust emitter for provider schema registries.
//! Started as a stripped down version of serde reflection's code generator for Rust.
//! Main changes are around module-qualified registry entries, required vs optional
//! field annotations and the generated top-level aggregates.
//!
use crate::config::CodeGeneratorConfig;
use crate::error::{BindgenError, Result};
use serde_generate::indent::{IndentConfig, IndentedWriter};
use serde_reflection::{ContainerFormat, Format, Named};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Rust keywords that need a raw identifier when used as field names.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_WORDS: [&str; 4] = ["crate", "self", "Self", "super"];

/// A container format indexed by `(module, type name)`.
pub type QualifiedName = (String, String);

/// One entry of a top-level aggregate (`Resources`, `DataSources` or `Providers`).
#[derive(Clone, Debug, PartialEq)]
pub struct RootMember {
    /// Key used in the configuration document, e.g. `databricks_cluster`.
    pub wire_name: String,
    /// Field of the aggregate, e.g. `cluster`.
    pub field_name: String,
    /// Record type of the entry, e.g. `ResourceCluster`.
    pub type_name: String,
    /// Module holding the record type, e.g. `resource_cluster`.
    pub module: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roots {
    pub provider: Option<RootMember>,
    pub resources: Vec<RootMember>,
    pub data_sources: Vec<RootMember>,
}

/// Record definitions exported from a provider schema.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    pub containers: BTreeMap<QualifiedName, ContainerFormat>,
    pub roots: Roots,
    /// Doc comments gathered from schema descriptions.
    pub comments: crate::config::DocComments,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Names of the modules the registry spreads its records over.
    pub fn modules(&self) -> BTreeSet<&str> {
        self.containers.keys().map(|(m, _)| m.as_str()).collect()
    }

    pub fn get(&self, type_name: &str) -> Option<&ContainerFormat> {
        self.containers
            .iter()
            .find(|((_, n), _)| n == type_name)
            .map(|(_, f)| f)
    }
}

/// Turn a schema key into a Rust field identifier.
///
/// Returns the identifier and whether it differs from the key once serde strips
/// the raw identifier prefix, i.e. whether a `rename` is needed.
pub fn rust_field_name(name: &str) -> (String, bool) {
    if NON_RAW_WORDS.contains(&name) {
        return (format!("{}_", name), true);
    }
    if RESERVED_WORDS.contains(&name) {
        return (format!("r#{}", name), false);
    }
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    let renamed = ident != name;
    (ident, renamed)
}

/// Main configuration object for code-generation in Rust.
pub struct CodeGenerator<'a> {
    /// Language-independent configuration.
    config: &'a CodeGeneratorConfig,
    /// Which derive macros should be added (independently from serialization).
    derive_macros: Vec<String>,
}

/// Shared state for the code generation of a Rust source file.
struct RustEmitter<'a, T> {
    /// Writer.
    out: IndentedWriter<T>,
    /// Generator.
    generator: &'a CodeGenerator<'a>,
    /// Current namespace (e.g. vec!["schema", "ResourceCluster"])
    current_namespace: Vec<String>,
}

impl<'a> CodeGenerator<'a> {
    /// Create a Rust code generator for the given config.
    pub fn new(config: &'a CodeGeneratorConfig) -> Self {
        Self {
            config,
            derive_macros: vec!["Clone", "Debug", "PartialEq"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Which derive macros should be added (independently from serialization).
    pub fn with_derive_macros(mut self, derive_macros: Vec<String>) -> Self {
        self.derive_macros = derive_macros;
        self
    }

    /// Write every definition of the registry into a single Rust source.
    pub fn output(&self, out: &mut dyn Write, registry: &Registry) -> Result<()> {
        let mut emitter = self.emitter(out);
        emitter.output_preamble()?;
        for ((_, name), format) in &registry.containers {
            emitter.output_container(name, format)?;
        }
        emitter.output_root(&registry.roots)?;
        emitter.output_aggregate("Resources", &registry.roots.resources)?;
        emitter.output_aggregate("DataSources", &registry.roots.data_sources)?;
        Ok(())
    }

    /// Write one Rust module per resource and data source under `dir`, along with
    /// the aggregates and a `mod.rs` re-exporting all of them.
    pub fn output_module_tree(&self, dir: &Path, registry: &Registry) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        for module in registry.modules() {
            let path = self.write_module(dir, module, |emitter| {
                emitter.output_preamble()?;
                for ((m, name), format) in &registry.containers {
                    if m == module {
                        emitter.output_container(name, format)?;
                    }
                }
                Ok(())
            })?;
            written.push(path);
        }

        written.push(self.write_module(dir, "root", |emitter| {
            emitter.output_preamble()?;
            emitter.out.write_all(b"use super::*;\n\n")?;
            emitter.output_root(&registry.roots)
        })?);
        written.push(self.write_module(dir, "resources", |emitter| {
            emitter.output_preamble()?;
            emitter.out.write_all(b"use super::*;\n\n")?;
            emitter.output_aggregate("Resources", &registry.roots.resources)
        })?);
        written.push(self.write_module(dir, "data_sources", |emitter| {
            emitter.output_preamble()?;
            emitter.out.write_all(b"use super::*;\n\n")?;
            emitter.output_aggregate("DataSources", &registry.roots.data_sources)
        })?);

        let mut modules: Vec<&str> = registry.modules().into_iter().collect();
        modules.extend_from_slice(&["data_sources", "resources", "root"]);
        modules.sort_unstable();
        written.push(self.write_module(dir, "mod", |emitter| {
            emitter.output_banner()?;
            writeln!(emitter.out)?;
            for module in &modules {
                writeln!(emitter.out, "mod {};", module)?;
            }
            writeln!(emitter.out)?;
            for module in &modules {
                writeln!(emitter.out, "pub use {}::*;", module)?;
            }
            Ok(())
        })?);

        Ok(written)
    }

    fn emitter<'b, W: Write>(&'b self, out: W) -> RustEmitter<'b, W> {
        let current_namespace = self
            .config
            .module_name
            .split('.')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        RustEmitter {
            out: IndentedWriter::new(out, IndentConfig::Space(4)),
            generator: self,
            current_namespace,
        }
    }

    fn write_module<'b, F>(&'b self, dir: &Path, module: &str, body: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut RustEmitter<'b, BufWriter<File>>) -> Result<()>,
    {
        let path = dir.join(format!("{}.rs", module));
        let file = BufWriter::new(File::create(&path)?);
        let mut emitter = self.emitter(file);
        body(&mut emitter)?;
        emitter.out.flush()?;
        info!(path = %path.display(), "wrote module");
        Ok(path)
    }
}

impl<'a, T> RustEmitter<'a, T>
where
    T: std::io::Write,
{
    fn output_comment(&mut self, name: &str) -> std::io::Result<()> {
        let mut path = self.current_namespace.clone();
        path.push(name.to_string());
        if let Some(doc) = self.generator.config.comments.get(&path) {
            let text = textwrap::indent(doc, "/// ").replace("\n\n", "\n///\n");
            write!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn output_banner(&mut self) -> std::io::Result<()> {
        writeln!(
            self.out,
            "// Code generated from the {} {} provider schema by tfbindgen. DO NOT EDIT.",
            self.generator.config.provider_source, self.generator.config.provider_version,
        )
    }

    fn output_preamble(&mut self) -> std::io::Result<()> {
        self.output_banner()?;
        writeln!(self.out)?;
        writeln!(self.out, "#![allow(unused_imports)]")?;
        writeln!(self.out, "use serde::{{Deserialize, Serialize}};")?;
        for (module, definitions) in &self.generator.config.external_definitions {
            // Skip the empty module name.
            if !module.is_empty() {
                writeln!(self.out, "use {}::{};", module, braced(definitions))?;
            }
        }
        let external_names: BTreeSet<&String> = self
            .generator
            .config
            .external_definitions
            .values()
            .flatten()
            .collect();
        if !external_names.iter().any(|n| n.as_str() == "Map") {
            writeln!(self.out, "use std::collections::BTreeMap as Map;")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn output_field_annotation(&mut self, rename: Option<&str>, format: &Format) -> std::io::Result<()> {
        let skip = match format {
            Format::Option(_) => Some("Option::is_none"),
            _ => None,
        };
        match (rename, skip) {
            (Some(wire), Some(skip)) => writeln!(
                self.out,
                "#[serde(rename = \"{}\", skip_serializing_if = \"{}\")]",
                wire, skip
            ),
            (Some(wire), None) => writeln!(self.out, "#[serde(rename = \"{}\")]", wire),
            (None, Some(skip)) => writeln!(self.out, "#[serde(skip_serializing_if = \"{}\")]", skip),
            (None, None) => Ok(()),
        }
    }

    fn quote_type(format: &Format) -> String {
        use Format::*;
        match format {
            TypeName(x) => x.to_string(),
            Unit => "()".into(),
            Bool => "bool".into(),
            I8 => "i8".into(),
            I16 => "i16".into(),
            I32 => "i32".into(),
            I64 => "i64".into(),
            I128 => "i128".into(),
            U8 => "u8".into(),
            U16 => "u16".into(),
            U32 => "u32".into(),
            U64 => "u64".into(),
            U128 => "u128".into(),
            F32 => "f32".into(),
            F64 => "f64".into(),
            Char => "char".into(),
            Str => "String".into(),
            Bytes => "Vec<u8>".into(),

            Option(format) => format!("Option<{}>", Self::quote_type(format)),
            Seq(format) => format!("Vec<{}>", Self::quote_type(format)),
            Map { key, value } => format!(
                "Map<{}, {}>",
                Self::quote_type(key),
                Self::quote_type(value)
            ),
            Tuple(formats) => format!("({})", Self::quote_types(formats)),
            TupleArray { content, size } => {
                format!("[{}; {}]", Self::quote_type(content), *size)
            }

            Variable(_) => panic!("unexpected value"),
        }
    }

    fn quote_types(formats: &[Format]) -> String {
        formats
            .iter()
            .map(Self::quote_type)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn output_fields(&mut self, fields: &[Named<Format>]) -> std::io::Result<()> {
        for field in fields {
            let (ident, renamed) = rust_field_name(&field.name);
            self.output_comment(&field.name)?;
            self.output_field_annotation(renamed.then(|| field.name.as_str()), &field.value)?;
            writeln!(
                self.out,
                "pub {}: {},",
                ident,
                Self::quote_type(&field.value),
            )?;
        }
        Ok(())
    }

    fn derive_line(&self) -> String {
        let mut derive_macros = self.generator.derive_macros.clone();
        derive_macros.push("Serialize".to_string());
        derive_macros.push("Deserialize".to_string());
        derive_macros.push("Default".to_string());
        format!("#[derive({})]\n#[serde(default)]\n", derive_macros.join(", "))
    }

    fn output_container(&mut self, name: &str, format: &ContainerFormat) -> Result<()> {
        let fields = match format {
            ContainerFormat::Struct(fields) => fields,
            other => {
                return Err(BindgenError::UnsupportedType(format!(
                    "container {} is not a struct: {:?}",
                    name, other
                )))
            }
        };
        self.output_comment(name)?;
        let prefix = self.derive_line();
        write!(self.out, "{}pub struct {} {{\n", prefix, name)?;
        self.current_namespace.push(name.to_string());
        self.out.indent();
        self.output_fields(fields)?;
        self.out.unindent();
        self.current_namespace.pop();
        writeln!(self.out, "}}\n")?;
        Ok(())
    }

    fn output_root(&mut self, roots: &Roots) -> Result<()> {
        let config = self.generator.config;
        writeln!(
            self.out,
            "pub const PROVIDER_SOURCE: &str = \"{}\";",
            config.provider_source
        )?;
        writeln!(
            self.out,
            "pub const PROVIDER_VERSION: &str = \"{}\";\n",
            config.provider_version
        )?;

        // Providers
        let prefix = self.derive_line();
        write!(self.out, "{}pub struct Providers {{\n", prefix)?;
        self.out.indent();
        if let Some(p) = &roots.provider {
            self.output_aggregate_field(p, "Option::is_none", &format!("Option<{}>", p.type_name))?;
        }
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        writeln!(self.out, "impl Providers {{")?;
        self.out.indent();
        writeln!(self.out, "pub fn new() -> Self {{")?;
        self.out.indent();
        writeln!(self.out, "Self {{")?;
        self.out.indent();
        if let Some(p) = &roots.provider {
            writeln!(self.out, "{}: Some({}::default()),", p.field_name, p.type_name)?;
        }
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        writeln!(self.out, "pub fn is_empty(&self) -> bool {{")?;
        self.out.indent();
        match &roots.provider {
            Some(p) => writeln!(self.out, "self.{}.is_none()", p.field_name)?,
            None => writeln!(self.out, "true")?,
        }
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;

        // Root
        let provider_name = roots
            .provider
            .as_ref()
            .map(|p| p.wire_name.as_str())
            .unwrap_or_else(|| config.provider_name());
        write!(self.out, "{}pub struct Root {{\n", prefix)?;
        self.out.indent();
        writeln!(self.out, "pub terraform: Map<String, Value>,")?;
        writeln!(self.out, "#[serde(skip_serializing_if = \"Providers::is_empty\")]")?;
        writeln!(self.out, "pub provider: Providers,")?;
        writeln!(self.out, "#[serde(skip_serializing_if = \"DataSources::is_empty\")]")?;
        writeln!(self.out, "pub data: DataSources,")?;
        writeln!(self.out, "#[serde(skip_serializing_if = \"Resources::is_empty\")]")?;
        writeln!(self.out, "pub resource: Resources,")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        writeln!(self.out, "impl Root {{")?;
        self.out.indent();
        writeln!(self.out, "pub fn new() -> Self {{")?;
        self.out.indent();
        writeln!(self.out, "let mut terraform = Map::new();")?;
        writeln!(self.out, "terraform.insert(")?;
        self.out.indent();
        writeln!(self.out, "\"required_providers\".to_string(),")?;
        writeln!(self.out, "serde_json::json!({{")?;
        self.out.indent();
        writeln!(self.out, "\"{}\": {{", provider_name)?;
        self.out.indent();
        writeln!(self.out, "\"source\": PROVIDER_SOURCE,")?;
        writeln!(self.out, "\"version\": PROVIDER_VERSION,")?;
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}),")?;
        self.out.unindent();
        writeln!(self.out, ");")?;
        writeln!(self.out, "Self {{")?;
        self.out.indent();
        writeln!(self.out, "terraform,")?;
        writeln!(self.out, "provider: Providers::new(),")?;
        writeln!(self.out, "data: DataSources::new(),")?;
        writeln!(self.out, "resource: Resources::new(),")?;
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        Ok(())
    }

    fn output_aggregate_field(&mut self, member: &RootMember, skip: &str, ty: &str) -> std::io::Result<()> {
        if member.field_name == member.wire_name {
            writeln!(self.out, "#[serde(skip_serializing_if = \"{}\")]", skip)?;
        } else {
            writeln!(
                self.out,
                "#[serde(rename = \"{}\", skip_serializing_if = \"{}\")]",
                member.wire_name, skip
            )?;
        }
        writeln!(self.out, "pub {}: {},", member.field_name, ty)
    }

    fn output_aggregate(&mut self, name: &str, members: &[RootMember]) -> Result<()> {
        let mut members: Vec<&RootMember> = members.iter().collect();
        members.sort_by(|a, b| a.wire_name.cmp(&b.wire_name));

        let prefix = self.derive_line();
        write!(self.out, "{}pub struct {} {{\n", prefix, name)?;
        self.out.indent();
        for m in &members {
            self.output_aggregate_field(m, "Map::is_empty", &format!("Map<String, {}>", m.type_name))?;
        }
        self.out.unindent();
        writeln!(self.out, "}}\n")?;

        writeln!(self.out, "impl {} {{", name)?;
        self.out.indent();
        writeln!(self.out, "pub fn new() -> Self {{")?;
        self.out.indent();
        writeln!(self.out, "Self {{")?;
        self.out.indent();
        for m in &members {
            writeln!(self.out, "{}: Map::new(),", m.field_name)?;
        }
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        writeln!(self.out, "pub fn is_empty(&self) -> bool {{")?;
        self.out.indent();
        if members.is_empty() {
            writeln!(self.out, "true")?;
        } else {
            for (i, m) in members.iter().enumerate() {
                let joiner = if i == 0 { "" } else { "&& " };
                if i == 1 {
                    self.out.indent();
                }
                writeln!(self.out, "{}self.{}.is_empty()", joiner, m.field_name)?;
            }
            if members.len() > 1 {
                self.out.unindent();
            }
        }
        self.out.unindent();
        writeln!(self.out, "}}")?;
        self.out.unindent();
        writeln!(self.out, "}}\n")?;
        Ok(())
    }
}

fn braced(definitions: &[String]) -> String {
    if definitions.len() == 1 {
        definitions[0].clone()
    } else {
        format!("{{{}}}", definitions.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::{fixture_config, fixture_registry};
    use tempfile::tempdir;

    fn render(config: &CodeGeneratorConfig, registry: &Registry) -> String {
        let mut out = Vec::new();
        CodeGenerator::new(config).output(&mut out, registry).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_field_names() {
        assert_eq!(rust_field_name("spark_version"), ("spark_version".to_string(), false));
        assert_eq!(rust_field_name("type"), ("r#type".to_string(), false));
        assert_eq!(rust_field_name("self"), ("self_".to_string(), true));
        assert_eq!(rust_field_name("x-ray"), ("x_ray".to_string(), true));
        assert_eq!(rust_field_name("2fa"), ("_2fa".to_string(), true));
    }

    #[test]
    fn test_generated_source_annotations() {
        let config = fixture_config();
        let source = render(&config, &fixture_registry());

        assert!(source.starts_with(
            "// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT."
        ));
        assert!(source.contains("use serde_json::Value;\n"));
        assert!(source.contains(
            "#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]\n#[serde(default)]\npub struct ResourceCluster {\n"
        ));
        // required fields carry no skip annotation
        assert!(source.contains("    pub spark_version: String,\n"));
        assert!(source.contains(
            "    #[serde(skip_serializing_if = \"Option::is_none\")]\n    pub num_workers: Option<i64>,\n"
        ));
        assert!(source.contains("    pub spot_bid_max_price: Option<f64>,\n"));
        assert!(source.contains("    pub autoscale: Option<ResourceClusterAutoscale>,\n"));
        assert!(source.contains("    pub library: Option<Vec<ResourceClusterLibrary>>,\n"));
        assert!(source.contains("    pub config: ResourceModelServingConfig,\n"));
        assert!(source.contains("    pub for_each: Option<Value>,\n"));
    }

    #[test]
    fn test_generated_aggregates() {
        let config = fixture_config();
        let source = render(&config, &fixture_registry());

        assert!(source.contains("pub const PROVIDER_SOURCE: &str = \"databricks/databricks\";"));
        assert!(source.contains(
            "    #[serde(rename = \"databricks_cluster\", skip_serializing_if = \"Map::is_empty\")]\n    pub cluster: Map<String, ResourceCluster>,\n"
        ));
        assert!(source.contains(
            "    #[serde(rename = \"databricks_current_user\", skip_serializing_if = \"Map::is_empty\")]\n    pub current_user: Map<String, DataSourceCurrentUser>,\n"
        ));
        assert!(source.contains("            cluster: Map::new(),\n"));
        assert!(source.contains("        self.app.is_empty()\n            && self.cluster.is_empty()\n"));
        assert!(source.contains("            databricks: Some(Config::default()),\n"));
        assert!(source.contains("            \"databricks\": {\n"));
        assert!(source.contains("            resource: Resources::new(),\n"));
    }

    #[test]
    fn test_registry_size() {
        assert!(Registry::new().is_empty());
        let registry = fixture_registry();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 18);
    }

    #[test]
    fn test_external_definitions_keep_value_import() {
        let mut extra = crate::config::ExternalDefinitions::new();
        extra.insert("chrono".to_string(), vec!["DateTime".to_string(), "Utc".to_string()]);
        let config = fixture_config().with_external_definitions(extra);
        let source = render(&config, &fixture_registry());

        assert!(source.contains("use chrono::{DateTime, Utc};\n"));
        assert!(source.contains("use serde_json::Value;\n"));
        assert!(source.contains("    pub for_each: Option<Value>,\n"));
        assert!(source.contains("    pub terraform: Map<String, Value>,\n"));
    }

    #[test]
    fn test_custom_derive_macros() {
        let config = fixture_config();
        let registry = fixture_registry();
        let mut out = Vec::new();
        CodeGenerator::new(&config)
            .with_derive_macros(vec!["Clone".to_string()])
            .output(&mut out, &registry)
            .unwrap();
        let source = String::from_utf8(out).unwrap();
        assert!(source.contains("#[derive(Clone, Serialize, Deserialize, Default)]"));
        assert!(!source.contains("PartialEq"));
    }

    #[test]
    fn test_comments_are_emitted() {
        let mut comments = crate::config::DocComments::new();
        comments.insert(
            vec![
                "schema".to_string(),
                "ResourceCluster".to_string(),
                "spark_version".to_string(),
            ],
            "Runtime version of the cluster.".to_string(),
        );
        let config = fixture_config().with_comments(comments);
        let source = render(&config, &fixture_registry());
        assert!(source.contains("    /// Runtime version of the cluster.\n    pub spark_version: String,\n"));
    }

    #[test]
    fn test_module_tree_output() {
        let config = fixture_config();
        let registry = fixture_registry();
        let dir = tempdir().unwrap();
        let written = CodeGenerator::new(&config)
            .output_module_tree(dir.path(), &registry)
            .unwrap();

        // one file per registry module, the three aggregates, and mod.rs
        assert_eq!(written.len(), registry.modules().len() + 4);
        for name in &["mod.rs", "root.rs", "resources.rs", "data_sources.rs", "resource_cluster.rs", "config.rs"] {
            assert!(dir.path().join(name).exists(), "missing {}", name);
        }

        let module = std::fs::read_to_string(dir.path().join("mod.rs")).unwrap();
        assert!(module.contains("mod resource_cluster;\n"));
        assert!(module.contains("pub use resource_cluster::*;\n"));

        let cluster = std::fs::read_to_string(dir.path().join("resource_cluster.rs")).unwrap();
        assert!(cluster.contains("pub struct ResourceClusterAutoscale {"));
        assert!(!cluster.contains("pub struct ResourceMount {"));

        let resources = std::fs::read_to_string(dir.path().join("resources.rs")).unwrap();
        assert!(resources.contains("use super::*;\n"));
        assert!(resources.contains("pub struct Resources {"));
    }
}
