// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataSources {
    #[serde(rename = "databricks_cluster", skip_serializing_if = "Map::is_empty")]
    pub cluster: Map<String, DataSourceCluster>,
    #[serde(rename = "databricks_current_user", skip_serializing_if = "Map::is_empty")]
    pub current_user: Map<String, DataSourceCurrentUser>,
    #[serde(rename = "databricks_job", skip_serializing_if = "Map::is_empty")]
    pub job: Map<String, DataSourceJob>,
    #[serde(rename = "databricks_node_type", skip_serializing_if = "Map::is_empty")]
    pub node_type: Map<String, DataSourceNodeType>,
    #[serde(rename = "databricks_notebook", skip_serializing_if = "Map::is_empty")]
    pub notebook: Map<String, DataSourceNotebook>,
    #[serde(rename = "databricks_schemas", skip_serializing_if = "Map::is_empty")]
    pub schemas: Map<String, DataSourceSchemas>,
    #[serde(rename = "databricks_spark_version", skip_serializing_if = "Map::is_empty")]
    pub spark_version: Map<String, DataSourceSparkVersion>,
    #[serde(rename = "databricks_volumes", skip_serializing_if = "Map::is_empty")]
    pub volumes: Map<String, DataSourceVolumes>,
}

impl DataSources {
    pub fn new() -> Self {
        Self {
            cluster: Map::new(),
            current_user: Map::new(),
            job: Map::new(),
            node_type: Map::new(),
            notebook: Map::new(),
            schemas: Map::new(),
            spark_version: Map::new(),
            volumes: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cluster.is_empty()
            && self.current_user.is_empty()
            && self.job.is_empty()
            && self.node_type.is_empty()
            && self.notebook.is_empty()
            && self.schemas.is_empty()
            && self.spark_version.is_empty()
            && self.volumes.is_empty()
    }
}

