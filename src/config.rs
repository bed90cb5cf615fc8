// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_PROVIDER_SOURCE: &str = "databricks/databricks";
pub const DEFAULT_PROVIDER_VERSION: &str = "1.58.0";
/// `number` attributes that always map to `f64`, on top of the configured ones.
pub const DEFAULT_FLOAT_ATTRIBUTES: &[&str] = &["spot_bid_max_price"];

/// Code generation options shared by the registry export and the emitter.
#[derive(Clone, Debug)]
pub struct CodeGeneratorConfig {
    pub(crate) module_name: String,
    pub(crate) external_definitions: ExternalDefinitions,
    pub(crate) comments: DocComments,
    pub(crate) provider_source: String,
    pub(crate) provider_version: String,
    pub(crate) float_attributes: BTreeSet<String>,
    pub(crate) with_descriptions: bool,
}

/// Track types definitions provided by external modules.
pub type ExternalDefinitions =
    std::collections::BTreeMap</* module */ String, /* type names */ Vec<String>>;

/// Track documentation to be attached to particular definitions.
pub type DocComments =
    std::collections::BTreeMap</* qualified name */ Vec<String>, /* comment */ String>;

impl CodeGeneratorConfig {
    /// Default config for the given module name.
    pub fn new(module_name: String) -> Self {
        let mut external_definitions = BTreeMap::new();
        external_definitions.insert("serde_json".to_string(), vec!["Value".to_string()]);
        Self {
            module_name,
            external_definitions,
            comments: BTreeMap::new(),
            provider_source: DEFAULT_PROVIDER_SOURCE.to_string(),
            provider_version: DEFAULT_PROVIDER_VERSION.to_string(),
            float_attributes: DEFAULT_FLOAT_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            with_descriptions: false,
        }
    }

    /// Container names provided by external modules, added to the default `serde_json::Value`.
    pub fn with_external_definitions(mut self, external_definitions: ExternalDefinitions) -> Self {
        for (module, names) in external_definitions {
            let known = self.external_definitions.entry(module).or_default();
            for name in names {
                if !known.contains(&name) {
                    known.push(name);
                }
            }
        }
        self
    }

    /// Comments attached to particular entity.
    pub fn with_comments(mut self, mut comments: DocComments) -> Self {
        // Make sure comments end with a (single) newline.
        for comment in comments.values_mut() {
            *comment = format!("{}\n", comment.trim());
        }
        self.comments = comments;
        self
    }

    /// Registry address of the provider, as written into `required_providers`.
    pub fn with_provider_source(mut self, provider_source: String) -> Self {
        self.provider_source = provider_source;
        self
    }

    /// Provider version the bindings are generated against.
    pub fn with_provider_version(mut self, provider_version: String) -> Self {
        self.provider_version = provider_version;
        self
    }

    /// Attribute names whose `number` type maps to `f64` instead of `i64`.
    /// `DEFAULT_FLOAT_ATTRIBUTES` stay in the set.
    pub fn with_float_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.float_attributes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Turn schema descriptions into doc comments on the generated fields.
    pub fn with_descriptions(mut self, with_descriptions: bool) -> Self {
        self.with_descriptions = with_descriptions;
        self
    }

    pub fn provider_source(&self) -> &str {
        &self.provider_source
    }

    pub fn provider_version(&self) -> &str {
        &self.provider_version
    }

    /// Local provider name, i.e. the last segment of the registry address.
    pub fn provider_name(&self) -> &str {
        self.provider_source
            .rsplit('/')
            .next()
            .unwrap_or(&self.provider_source)
    }

    pub fn is_float_attribute(&self, name: &str) -> bool {
        self.float_attributes.contains(name)
    }

    /// Merge comments gathered from the schema, keeping the ones set explicitly.
    pub(crate) fn merge_comments(&mut self, comments: DocComments) {
        for (path, text) in comments {
            self.comments
                .entry(path)
                .or_insert_with(|| format!("{}\n", text.trim()));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodeGeneratorConfig::new("schema".to_string());
        assert_eq!(config.provider_source(), DEFAULT_PROVIDER_SOURCE);
        assert_eq!(config.provider_version(), DEFAULT_PROVIDER_VERSION);
        assert_eq!(config.provider_name(), "databricks");
        assert!(config.external_definitions.contains_key("serde_json"));
        assert!(config.is_float_attribute("spot_bid_max_price"));
    }

    #[test]
    fn test_comments_are_normalized() {
        let mut comments = DocComments::new();
        comments.insert(vec!["a".to_string()], "  some text \n\n".to_string());
        let config = CodeGeneratorConfig::new("schema".to_string()).with_comments(comments);
        assert_eq!(
            config.comments.get(&vec!["a".to_string()]).map(String::as_str),
            Some("some text\n")
        );
    }

    #[test]
    fn test_merge_keeps_explicit_comments() {
        let mut explicit = DocComments::new();
        explicit.insert(vec!["a".to_string()], "explicit".to_string());
        let mut config = CodeGeneratorConfig::new("schema".to_string()).with_comments(explicit);

        let mut gathered = DocComments::new();
        gathered.insert(vec!["a".to_string()], "gathered".to_string());
        gathered.insert(vec!["b".to_string()], "other".to_string());
        config.merge_comments(gathered);

        assert_eq!(config.comments.len(), 2);
        assert_eq!(
            config.comments.get(&vec!["a".to_string()]).map(String::as_str),
            Some("explicit\n")
        );
    }

    #[test]
    fn test_float_attributes_and_source() {
        let config = CodeGeneratorConfig::new("schema".to_string())
            .with_provider_source("registry.terraform.io/acme/widgets".to_string())
            .with_float_attributes(vec!["ratio"]);
        assert_eq!(config.provider_name(), "widgets");
        assert!(config.is_float_attribute("ratio"));
        assert!(config.is_float_attribute("spot_bid_max_price"));
    }

    #[test]
    fn test_external_definitions_keep_value() {
        let mut extra = ExternalDefinitions::new();
        extra.insert("serde_json".to_string(), vec!["Number".to_string(), "Value".to_string()]);
        extra.insert("chrono".to_string(), vec!["DateTime".to_string()]);
        let config = CodeGeneratorConfig::new("schema".to_string()).with_external_definitions(extra);

        assert_eq!(
            config.external_definitions.get("serde_json"),
            Some(&vec!["Value".to_string(), "Number".to_string()])
        );
        assert!(config.external_definitions.contains_key("chrono"));
    }
}
