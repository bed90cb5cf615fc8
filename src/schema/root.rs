// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

use super::*;

pub const PROVIDER_SOURCE: &str = "databricks/databricks";
pub const PROVIDER_VERSION: &str = "1.58.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Providers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databricks: Option<Config>,
}

impl Providers {
    pub fn new() -> Self {
        Self {
            databricks: Some(Config::default()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.databricks.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Root {
    pub terraform: Map<String, Value>,
    #[serde(skip_serializing_if = "Providers::is_empty")]
    pub provider: Providers,
    #[serde(skip_serializing_if = "DataSources::is_empty")]
    pub data: DataSources,
    #[serde(skip_serializing_if = "Resources::is_empty")]
    pub resource: Resources,
}

impl Root {
    pub fn new() -> Self {
        let mut terraform = Map::new();
        terraform.insert(
            "required_providers".to_string(),
            serde_json::json!({
                "databricks": {
                    "source": PROVIDER_SOURCE,
                    "version": PROVIDER_VERSION,
                }
            }),
        );
        Self {
            terraform,
            provider: Providers::new(),
            data: DataSources::new(),
            resource: Resources::new(),
        }
    }
}

