// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_policy_default_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotermination_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_security_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_elastic_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_disk_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_node: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_wait: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_conf: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_env_vars: Option<Map<String, String>>,
    pub spark_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ml_runtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<ResourceClusterAutoscale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<ResourceClusterAwsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_attributes: Option<ResourceClusterAzureAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_log_conf: Option<ResourceClusterClusterLogConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_mount_info: Option<Vec<ResourceClusterClusterMountInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<ResourceClusterDockerImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_attributes: Option<ResourceClusterGcpAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_scripts: Option<Vec<ResourceClusterInitScripts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<ResourceClusterLibrary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_type: Option<ResourceClusterWorkloadType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterAutoscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_workers: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterAwsAttributes {
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
pub struct ResourceClusterAzureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_on_demand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_info: Option<ResourceClusterAzureAttributesLogAnalyticsInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterAzureAttributesLogAnalyticsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_primary_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_workspace_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterLogConf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceClusterClusterLogConfDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceClusterClusterLogConfS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceClusterClusterLogConfVolumes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterLogConfDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterLogConfS3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canned_acl: Option<String>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterLogConfVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterMountInfo {
    pub local_mount_dir_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_mount_dir_path: Option<String>,
    pub network_filesystem_info: ResourceClusterClusterMountInfoNetworkFilesystemInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterClusterMountInfoNetworkFilesystemInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<String>,
    pub server_address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterDockerImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<ResourceClusterDockerImageBasicAuth>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterDockerImageBasicAuth {
    pub password: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterGcpAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_disk_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_service_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ssd_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_preemptible_executors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abfss: Option<ResourceClusterInitScriptsAbfss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceClusterInitScriptsDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ResourceClusterInitScriptsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs: Option<ResourceClusterInitScriptsGcs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceClusterInitScriptsS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceClusterInitScriptsVolumes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceClusterInitScriptsWorkspace>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsAbfss {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsFile {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsGcs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsS3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canned_acl: Option<String>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterInitScriptsWorkspace {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterLibrary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cran: Option<ResourceClusterLibraryCran>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<ResourceClusterLibraryMaven>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pypi: Option<ResourceClusterLibraryPypi>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterLibraryCran {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterLibraryMaven {
    pub coordinates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterLibraryPypi {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterWorkloadType {
    pub clients: ResourceClusterWorkloadTypeClients,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceClusterWorkloadTypeClients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebooks: Option<bool>,
}

