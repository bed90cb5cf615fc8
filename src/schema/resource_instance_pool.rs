// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_elastic_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub idle_instance_autotermination_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    pub instance_pool_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_idle_instances: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preloaded_spark_versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<ResourceInstancePoolAwsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_attributes: Option<ResourceInstancePoolAzureAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_spec: Option<ResourceInstancePoolDiskSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_attributes: Option<ResourceInstancePoolGcpAttributes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePoolAwsAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_price_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePoolAzureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_max_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePoolDiskSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<ResourceInstancePoolDiskSpecDiskType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePoolDiskSpecDiskType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_disk_volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceInstancePoolGcpAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ssd_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

