// Code generated from the databricks/databricks 1.58.0 provider schema by tfbindgen. DO NOT EDIT.

mod config;
mod data_source_cluster;
mod data_source_current_user;
mod data_source_job;
mod data_source_node_type;
mod data_source_notebook;
mod data_source_schemas;
mod data_source_spark_version;
mod data_source_volumes;
mod data_sources;
mod resource_catalog;
mod resource_cluster;
mod resource_dashboard;
mod resource_directory;
mod resource_grants;
mod resource_instance_pool;
mod resource_job;
mod resource_library;
mod resource_mlflow_experiment;
mod resource_mlflow_model;
mod resource_model_serving;
mod resource_mount;
mod resource_notebook;
mod resource_permissions;
mod resource_pipeline;
mod resource_registered_model;
mod resource_schema;
mod resource_secret;
mod resource_secret_scope;
mod resource_volume;
mod resource_workspace_file;
mod resources;
mod root;

pub use config::*;
pub use data_source_cluster::*;
pub use data_source_current_user::*;
pub use data_source_job::*;
pub use data_source_node_type::*;
pub use data_source_notebook::*;
pub use data_source_schemas::*;
pub use data_source_spark_version::*;
pub use data_source_volumes::*;
pub use data_sources::*;
pub use resource_catalog::*;
pub use resource_cluster::*;
pub use resource_dashboard::*;
pub use resource_directory::*;
pub use resource_grants::*;
pub use resource_instance_pool::*;
pub use resource_job::*;
pub use resource_library::*;
pub use resource_mlflow_experiment::*;
pub use resource_mlflow_model::*;
pub use resource_model_serving::*;
pub use resource_mount::*;
pub use resource_notebook::*;
pub use resource_permissions::*;
pub use resource_pipeline::*;
pub use resource_registered_model::*;
pub use resource_schema::*;
pub use resource_secret::*;
pub use resource_secret_scope::*;
pub use resource_volume::*;
pub use resource_workspace_file::*;
pub use resources::*;
pub use root::*;
