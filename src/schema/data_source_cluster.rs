// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_info: Option<DataSourceClusterClusterInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceClusterClusterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotermination_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_security_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_elastic_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_disk_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_conf: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_env_vars: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<DataSourceClusterClusterInfoAutoscale>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceClusterClusterInfoAutoscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_workers: Option<i64>,
}

