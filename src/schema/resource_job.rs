// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_running: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_run_state: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<ResourceJobContinuous>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<ResourceJobDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<ResourceJobEmailNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<ResourceJobEnvironment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_source: Option<ResourceJobGitSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<ResourceJobHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_cluster: Option<Vec<ResourceJobJobCluster>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<ResourceJobNotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Vec<ResourceJobParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<ResourceJobQueue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as: Option<ResourceJobRunAs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ResourceJobSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Vec<ResourceJobTask>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ResourceJobTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_notifications: Option<ResourceJobWebhookNotifications>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobContinuous {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobDeployment {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_file_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobEmailNotifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_skipped_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_duration_warning_threshold_exceeded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_start: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_streaming_backlog_exceeded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobEnvironment {
    pub environment_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ResourceJobEnvironmentSpec>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobEnvironmentSpec {
    pub client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobGitSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_source: Option<ResourceJobGitSourceJobSource>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobGitSourceJobSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dirty_state: Option<String>,
    pub import_from_git_branch: String,
    pub job_config_path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobHealth {
    pub rules: Vec<ResourceJobHealthRules>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobHealthRules {
    pub metric: String,
    pub op: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobCluster {
    pub job_cluster_key: String,
    pub new_cluster: ResourceJobJobClusterNewCluster,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_policy_default_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotermination_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_security_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_elastic_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_disk_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_node: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
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
    pub use_ml_runtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<ResourceJobJobClusterNewClusterAutoscale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<ResourceJobJobClusterNewClusterAwsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_attributes: Option<ResourceJobJobClusterNewClusterAzureAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_log_conf: Option<ResourceJobJobClusterNewClusterClusterLogConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<ResourceJobJobClusterNewClusterDockerImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_attributes: Option<ResourceJobJobClusterNewClusterGcpAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_scripts: Option<Vec<ResourceJobJobClusterNewClusterInitScripts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_type: Option<ResourceJobJobClusterNewClusterWorkloadType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterAutoscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_workers: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterAwsAttributes {
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
pub struct ResourceJobJobClusterNewClusterAzureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_on_demand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_info: Option<ResourceJobJobClusterNewClusterAzureAttributesLogAnalyticsInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterAzureAttributesLogAnalyticsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_primary_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_workspace_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterClusterLogConf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceJobJobClusterNewClusterClusterLogConfDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceJobJobClusterNewClusterClusterLogConfS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceJobJobClusterNewClusterClusterLogConfVolumes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterClusterLogConfDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterClusterLogConfS3 {
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
pub struct ResourceJobJobClusterNewClusterClusterLogConfVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterDockerImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<ResourceJobJobClusterNewClusterDockerImageBasicAuth>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterDockerImageBasicAuth {
    pub password: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterGcpAttributes {
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
pub struct ResourceJobJobClusterNewClusterInitScripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abfss: Option<ResourceJobJobClusterNewClusterInitScriptsAbfss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceJobJobClusterNewClusterInitScriptsDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ResourceJobJobClusterNewClusterInitScriptsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs: Option<ResourceJobJobClusterNewClusterInitScriptsGcs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceJobJobClusterNewClusterInitScriptsS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceJobJobClusterNewClusterInitScriptsVolumes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceJobJobClusterNewClusterInitScriptsWorkspace>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsAbfss {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsFile {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsGcs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsS3 {
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
pub struct ResourceJobJobClusterNewClusterInitScriptsVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterInitScriptsWorkspace {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterWorkloadType {
    pub clients: ResourceJobJobClusterNewClusterWorkloadTypeClients,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobJobClusterNewClusterWorkloadTypeClients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebooks: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobNotificationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_canceled_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_skipped_runs: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobParameter {
    pub default: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobQueue {
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobRunAs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_status: Option<String>,
    pub quartz_cron_expression: String,
    pub timezone_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_optimization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_cluster_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_retry_interval_millis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_on_timeout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_if: Option<String>,
    pub task_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_task: Option<ResourceJobTaskConditionTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbt_task: Option<ResourceJobTaskDbtTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<ResourceJobTaskDependsOn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<ResourceJobTaskEmailNotifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<ResourceJobTaskHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Vec<ResourceJobTaskLibrary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_cluster: Option<ResourceJobTaskNewCluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_task: Option<ResourceJobTaskNotebookTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<ResourceJobTaskNotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_task: Option<ResourceJobTaskPipelineTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_wheel_task: Option<ResourceJobTaskPythonWheelTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_job_task: Option<ResourceJobTaskRunJobTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_jar_task: Option<ResourceJobTaskSparkJarTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_python_task: Option<ResourceJobTaskSparkPythonTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_submit_task: Option<ResourceJobTaskSparkSubmitTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_task: Option<ResourceJobTaskSqlTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_notifications: Option<ResourceJobTaskWebhookNotifications>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskConditionTask {
    pub left: String,
    pub op: String,
    pub right: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskDbtTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    pub commands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskDependsOn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub task_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskEmailNotifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_skipped_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_duration_warning_threshold_exceeded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_start: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_streaming_backlog_exceeded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskHealth {
    pub rules: Vec<ResourceJobTaskHealthRules>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskHealthRules {
    pub metric: String,
    pub op: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskLibrary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cran: Option<ResourceJobTaskLibraryCran>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven: Option<ResourceJobTaskLibraryMaven>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pypi: Option<ResourceJobTaskLibraryPypi>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskLibraryCran {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskLibraryMaven {
    pub coordinates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskLibraryPypi {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_policy_default_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autotermination_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_security_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_elastic_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_local_disk_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_node: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
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
    pub use_ml_runtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<ResourceJobTaskNewClusterAutoscale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_attributes: Option<ResourceJobTaskNewClusterAwsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_attributes: Option<ResourceJobTaskNewClusterAzureAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_log_conf: Option<ResourceJobTaskNewClusterClusterLogConf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<ResourceJobTaskNewClusterDockerImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcp_attributes: Option<ResourceJobTaskNewClusterGcpAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_scripts: Option<Vec<ResourceJobTaskNewClusterInitScripts>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_type: Option<ResourceJobTaskNewClusterWorkloadType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterAutoscale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_workers: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterAwsAttributes {
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
pub struct ResourceJobTaskNewClusterAzureAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_on_demand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_bid_max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_info: Option<ResourceJobTaskNewClusterAzureAttributesLogAnalyticsInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterAzureAttributesLogAnalyticsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_primary_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_analytics_workspace_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterClusterLogConf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceJobTaskNewClusterClusterLogConfDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceJobTaskNewClusterClusterLogConfS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceJobTaskNewClusterClusterLogConfVolumes>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterClusterLogConfDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterClusterLogConfS3 {
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
pub struct ResourceJobTaskNewClusterClusterLogConfVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterDockerImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<ResourceJobTaskNewClusterDockerImageBasicAuth>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterDockerImageBasicAuth {
    pub password: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterGcpAttributes {
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
pub struct ResourceJobTaskNewClusterInitScripts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abfss: Option<ResourceJobTaskNewClusterInitScriptsAbfss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbfs: Option<ResourceJobTaskNewClusterInitScriptsDbfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ResourceJobTaskNewClusterInitScriptsFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs: Option<ResourceJobTaskNewClusterInitScriptsGcs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<ResourceJobTaskNewClusterInitScriptsS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<ResourceJobTaskNewClusterInitScriptsVolumes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceJobTaskNewClusterInitScriptsWorkspace>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsAbfss {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsDbfs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsFile {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsGcs {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsS3 {
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
pub struct ResourceJobTaskNewClusterInitScriptsVolumes {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterInitScriptsWorkspace {
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterWorkloadType {
    pub clients: ResourceJobTaskNewClusterWorkloadTypeClients,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNewClusterWorkloadTypeClients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebooks: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNotebookTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_parameters: Option<Map<String, String>>,
    pub notebook_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskNotificationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_on_last_attempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_canceled_runs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_alert_for_skipped_runs: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskPipelineTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_refresh: Option<bool>,
    pub pipeline_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskPythonWheelTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_parameters: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskRunJobTask {
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_parameters: Option<Map<String, String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSparkJarTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSparkPythonTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
    pub python_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSparkSubmitTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, String>>,
    pub warehouse_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<ResourceJobTaskSqlTaskAlert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<ResourceJobTaskSqlTaskDashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ResourceJobTaskSqlTaskFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<ResourceJobTaskSqlTaskQuery>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskAlert {
    pub alert_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_subscriptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<ResourceJobTaskSqlTaskAlertSubscriptions>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskAlertSubscriptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskDashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_subject: Option<String>,
    pub dashboard_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_subscriptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<ResourceJobTaskSqlTaskDashboardSubscriptions>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskDashboardSubscriptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskFile {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskSqlTaskQuery {
    pub query_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_duration_warning_threshold_exceeded: Option<Vec<ResourceJobTaskWebhookNotificationsOnDurationWarningThresholdExceeded>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Vec<ResourceJobTaskWebhookNotificationsOnFailure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_start: Option<Vec<ResourceJobTaskWebhookNotificationsOnStart>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_streaming_backlog_exceeded: Option<Vec<ResourceJobTaskWebhookNotificationsOnStreamingBacklogExceeded>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Vec<ResourceJobTaskWebhookNotificationsOnSuccess>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotificationsOnDurationWarningThresholdExceeded {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotificationsOnFailure {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotificationsOnStart {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotificationsOnStreamingBacklogExceeded {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTaskWebhookNotificationsOnSuccess {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_arrival: Option<ResourceJobTriggerFileArrival>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic: Option<ResourceJobTriggerPeriodic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_update: Option<ResourceJobTriggerTableUpdate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTriggerFileArrival {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time_between_triggers_seconds: Option<i64>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_after_last_change_seconds: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTriggerPeriodic {
    pub interval: i64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobTriggerTableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time_between_triggers_seconds: Option<i64>,
    pub table_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_after_last_change_seconds: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_duration_warning_threshold_exceeded: Option<Vec<ResourceJobWebhookNotificationsOnDurationWarningThresholdExceeded>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_failure: Option<Vec<ResourceJobWebhookNotificationsOnFailure>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_start: Option<Vec<ResourceJobWebhookNotificationsOnStart>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_streaming_backlog_exceeded: Option<Vec<ResourceJobWebhookNotificationsOnStreamingBacklogExceeded>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_success: Option<Vec<ResourceJobWebhookNotificationsOnSuccess>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotificationsOnDurationWarningThresholdExceeded {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotificationsOnFailure {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotificationsOnStart {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotificationsOnStreamingBacklogExceeded {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceJobWebhookNotificationsOnSuccess {
    pub id: String,
}

