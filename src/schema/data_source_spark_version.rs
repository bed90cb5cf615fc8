// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceSparkVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genomics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graviton: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scala: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_version: Option<String>,
}

