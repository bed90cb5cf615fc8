// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSourceCurrentUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphanumeric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_url: Option<String>,
}

