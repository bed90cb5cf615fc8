// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_id_token_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions_id_token_request_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_login_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_use_msi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_workspace_resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databricks_cli_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databricks_id_token_filepath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_truncate_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_service_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serverless_compute_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
}

