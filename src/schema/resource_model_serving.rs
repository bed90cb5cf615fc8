// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_endpoint_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ResourceModelServingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<Vec<ResourceModelServingRateLimits>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ResourceModelServingTags>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_capture_config: Option<ResourceModelServingConfigAutoCaptureConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_entities: Option<Vec<ResourceModelServingConfigServedEntities>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_config: Option<ResourceModelServingConfigTrafficConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigAutoCaptureConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name_prefix: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigServedEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_vars: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_profile_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_provisioned_throughput: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_provisioned_throughput: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_to_zero_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_model: Option<ResourceModelServingConfigServedEntitiesExternalModel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigServedEntitiesExternalModel {
    pub name: String,
    pub provider: String,
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_config: Option<ResourceModelServingConfigServedEntitiesExternalModelOpenaiConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigServedEntitiesExternalModelOpenaiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_deployment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_organization: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigTrafficConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<ResourceModelServingConfigTrafficConfigRoutes>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingConfigTrafficConfigRoutes {
    pub served_model_name: String,
    pub traffic_percentage: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingRateLimits {
    pub calls: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub renewal_period: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResourceModelServingTags {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

