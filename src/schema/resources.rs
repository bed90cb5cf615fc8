// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

#![allow(unused_imports)]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap as Map;

use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Resources {
    #[serde(rename = "databricks_catalog", skip_serializing_if = "Map::is_empty")]
    pub catalog: Map<String, ResourceCatalog>,
    #[serde(rename = "databricks_cluster", skip_serializing_if = "Map::is_empty")]
    pub cluster: Map<String, ResourceCluster>,
    #[serde(rename = "databricks_dashboard", skip_serializing_if = "Map::is_empty")]
    pub dashboard: Map<String, ResourceDashboard>,
    #[serde(rename = "databricks_directory", skip_serializing_if = "Map::is_empty")]
    pub directory: Map<String, ResourceDirectory>,
    #[serde(rename = "databricks_grants", skip_serializing_if = "Map::is_empty")]
    pub grants: Map<String, ResourceGrants>,
    #[serde(rename = "databricks_instance_pool", skip_serializing_if = "Map::is_empty")]
    pub instance_pool: Map<String, ResourceInstancePool>,
    #[serde(rename = "databricks_job", skip_serializing_if = "Map::is_empty")]
    pub job: Map<String, ResourceJob>,
    #[serde(rename = "databricks_library", skip_serializing_if = "Map::is_empty")]
    pub library: Map<String, ResourceLibrary>,
    #[serde(rename = "databricks_mlflow_experiment", skip_serializing_if = "Map::is_empty")]
    pub mlflow_experiment: Map<String, ResourceMlflowExperiment>,
    #[serde(rename = "databricks_mlflow_model", skip_serializing_if = "Map::is_empty")]
    pub mlflow_model: Map<String, ResourceMlflowModel>,
    #[serde(rename = "databricks_model_serving", skip_serializing_if = "Map::is_empty")]
    pub model_serving: Map<String, ResourceModelServing>,
    #[serde(rename = "databricks_mount", skip_serializing_if = "Map::is_empty")]
    pub mount: Map<String, ResourceMount>,
    #[serde(rename = "databricks_notebook", skip_serializing_if = "Map::is_empty")]
    pub notebook: Map<String, ResourceNotebook>,
    #[serde(rename = "databricks_permissions", skip_serializing_if = "Map::is_empty")]
    pub permissions: Map<String, ResourcePermissions>,
    #[serde(rename = "databricks_pipeline", skip_serializing_if = "Map::is_empty")]
    pub pipeline: Map<String, ResourcePipeline>,
    #[serde(rename = "databricks_registered_model", skip_serializing_if = "Map::is_empty")]
    pub registered_model: Map<String, ResourceRegisteredModel>,
    #[serde(rename = "databricks_schema", skip_serializing_if = "Map::is_empty")]
    pub schema: Map<String, ResourceSchema>,
    #[serde(rename = "databricks_secret", skip_serializing_if = "Map::is_empty")]
    pub secret: Map<String, ResourceSecret>,
    #[serde(rename = "databricks_secret_scope", skip_serializing_if = "Map::is_empty")]
    pub secret_scope: Map<String, ResourceSecretScope>,
    #[serde(rename = "databricks_volume", skip_serializing_if = "Map::is_empty")]
    pub volume: Map<String, ResourceVolume>,
    #[serde(rename = "databricks_workspace_file", skip_serializing_if = "Map::is_empty")]
    pub workspace_file: Map<String, ResourceWorkspaceFile>,
}

impl Resources {
    pub fn new() -> Self {
        Self {
            catalog: Map::new(),
            cluster: Map::new(),
            dashboard: Map::new(),
            directory: Map::new(),
            grants: Map::new(),
            instance_pool: Map::new(),
            job: Map::new(),
            library: Map::new(),
            mlflow_experiment: Map::new(),
            mlflow_model: Map::new(),
            model_serving: Map::new(),
            mount: Map::new(),
            notebook: Map::new(),
            permissions: Map::new(),
            pipeline: Map::new(),
            registered_model: Map::new(),
            schema: Map::new(),
            secret: Map::new(),
            secret_scope: Map::new(),
            volume: Map::new(),
            workspace_file: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
            && self.cluster.is_empty()
            && self.dashboard.is_empty()
            && self.directory.is_empty()
            && self.grants.is_empty()
            && self.instance_pool.is_empty()
            && self.job.is_empty()
            && self.library.is_empty()
            && self.mlflow_experiment.is_empty()
            && self.mlflow_model.is_empty()
            && self.model_serving.is_empty()
            && self.mount.is_empty()
            && self.notebook.is_empty()
            && self.permissions.is_empty()
            && self.pipeline.is_empty()
            && self.registered_model.is_empty()
            && self.schema.is_empty()
            && self.secret.is_empty()
            && self.secret_scope.is_empty()
            && self.volume.is_empty()
            && self.workspace_file.is_empty()
    }
}

