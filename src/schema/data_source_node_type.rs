// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceNodeType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_per_core: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graviton: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_io_cache_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk_min_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cores: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gpus: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_memory_gb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon_driver_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon_worker_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_port_forwarding: Option<bool>,
}

