// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_last_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Vec<ResourcePipelineCluster>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<ResourcePipelineDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<ResourcePipelineFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<ResourcePipelineLibrary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Vec<ResourcePipelineNotification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ResourcePipelineTrigger>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_policy_default_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_disk_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_conf: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_env_vars: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<ResourcePipelineClusterAutoscale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<ResourcePipelineClusterAwsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_attributes: Option<ResourcePipelineClusterAzureAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_attributes: Option<ResourcePipelineClusterGcpAttributes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineClusterAutoscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineClusterAwsAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_iops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_throughput: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_on_demand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_price_percent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineClusterAzureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_on_demand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_max_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineClusterGcpAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_service_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ssd_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineDeployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_file_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineLibrary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ResourcePipelineLibraryFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<ResourcePipelineLibraryMaven>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<ResourcePipelineLibraryNotebook>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineLibraryFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineLibraryMaven {
    pub coordinates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineLibraryNotebook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_recipients: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<ResourcePipelineTriggerCron>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual: Option<ResourcePipelineTriggerManual>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineTriggerCron {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quartz_cron_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourcePipelineTriggerManual {
}

