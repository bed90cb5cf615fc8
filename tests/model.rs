use databricks_tfschema::one_of::MountBackend;
use databricks_tfschema::schema::*;
use serde_json::{json, Value};
use std::collections::BTreeMap as Map;

const WORKSPACE_CONFIG: &str = "./tests/fixtures/workspace-config.tf.json";

fn read_document() -> Value {
    let text = std::fs::read_to_string(WORKSPACE_CONFIG).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_unset_optionals_are_omitted() {
    assert_eq!(
        serde_json::to_value(&ResourceCluster::default()).unwrap(),
        json!({"spark_version": ""})
    );
    assert_eq!(
        serde_json::to_value(&ResourceModelServing::default()).unwrap(),
        json!({"name": ""})
    );
    assert_eq!(
        serde_json::to_value(&DataSourceCurrentUser::default()).unwrap(),
        json!({})
    );
}

#[test]
fn test_required_fields_are_always_emitted() {
    assert_eq!(
        serde_json::to_value(&ResourceSecret::default()).unwrap(),
        json!({"key": "", "scope": "", "string_value": ""})
    );
    assert_eq!(
        serde_json::to_value(&ResourceGrants::default()).unwrap(),
        json!({"grant": []})
    );
    assert_eq!(
        serde_json::to_value(&ResourceMountAbfs::default()).unwrap(),
        json!({
            "client_id": "",
            "client_secret_key": "",
            "client_secret_scope": "",
            "initialize_file_system": false,
        })
    );
}

#[test]
fn test_empty_optionals_are_still_written() {
    let cluster = ResourceCluster {
        spark_version: "15.4.x-scala2.12".to_string(),
        custom_tags: Some(Map::new()),
        num_workers: Some(0),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&cluster).unwrap(),
        json!({"spark_version": "15.4.x-scala2.12", "custom_tags": {}, "num_workers": 0})
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let cluster: ResourceCluster = serde_json::from_str(r#"{"num_workers": 3}"#).unwrap();
    assert_eq!(cluster.spark_version, "");
    assert_eq!(cluster.num_workers, Some(3));
    assert_eq!(cluster.autoscale, None);
}

#[test]
fn test_cluster_in_root_document() {
    let mut root = Root::new();
    root.resource.cluster.insert(
        "example".to_string(),
        ResourceCluster {
            spark_version: "15.4.x-scala2.12".to_string(),
            num_workers: Some(2),
            ..Default::default()
        },
    );

    let doc = serde_json::to_value(&root).unwrap();
    assert_eq!(
        doc["resource"],
        json!({
            "databricks_cluster": {
                "example": {"spark_version": "15.4.x-scala2.12", "num_workers": 2}
            }
        })
    );
    assert_eq!(
        doc["terraform"]["required_providers"]["databricks"],
        json!({"source": PROVIDER_SOURCE, "version": PROVIDER_VERSION})
    );
    assert_eq!(doc["provider"], json!({"databricks": {}}));
    assert!(doc.get("data").is_none());
}

#[test]
fn test_aggregates_start_empty() {
    assert!(Resources::new().is_empty());
    assert!(DataSources::new().is_empty());
    assert!(Providers::default().is_empty());
    assert!(!Providers::new().is_empty());

    let mut data = DataSources::new();
    data.current_user
        .insert("me".to_string(), DataSourceCurrentUser::default());
    assert!(!data.is_empty());
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({"databricks_current_user": {"me": {}}})
    );
}

#[test]
fn test_mount_backend_is_emitted_alone() {
    let mount = ResourceMount::from(MountBackend::Gs(ResourceMountGs {
        bucket_name: "raw-events".to_string(),
        ..Default::default()
    }));
    assert_eq!(
        serde_json::to_value(&mount).unwrap(),
        json!({"gs": {"bucket_name": "raw-events"}})
    );
}

#[test]
fn test_dynamic_meta_arguments() {
    let scope = ResourceSecretScope {
        name: "${each.key}".to_string(),
        for_each: Some(json!(["app", "etl"])),
        depends_on: Some(vec!["databricks_cluster.shared".to_string()]),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&scope).unwrap(),
        json!({
            "name": "${each.key}",
            "for_each": ["app", "etl"],
            "depends_on": ["databricks_cluster.shared"],
        })
    );
}

#[test]
fn test_read_workspace_document() {
    let root: Root = serde_json::from_value(read_document()).unwrap();

    let provider = root.provider.databricks.as_ref().unwrap();
    assert_eq!(provider.auth_type.as_deref(), Some("pat"));

    let lts = &root.data.spark_version["lts"];
    assert_eq!(lts.long_term_support, Some(true));

    let cluster = &root.resource.cluster["shared"];
    assert_eq!(cluster.spark_version, "${data.databricks_spark_version.lts.id}");
    assert_eq!(cluster.autoscale.as_ref().and_then(|a| a.max_workers), Some(4));
    assert_eq!(
        cluster
            .azure_attributes
            .as_ref()
            .and_then(|a| a.spot_bid_max_price),
        Some(-1.0)
    );
    let libraries = cluster.library.as_ref().unwrap();
    assert_eq!(libraries.len(), 2);
    assert_eq!(libraries[1].jar.as_deref(), Some("dbfs:/FileStore/jars/etl.jar"));

    let task = &root.resource.job["nightly"].task.as_ref().unwrap()[0];
    assert_eq!(task.task_key, "ingest");
    assert_eq!(
        task.notebook_task.as_ref().map(|n| n.notebook_path.as_str()),
        Some("/Shared/ingest")
    );

    assert_eq!(root.resource.secret["token"].key, "token");
}

#[test]
fn test_workspace_document_round_trips() {
    let doc = read_document();
    let root: Root = serde_json::from_value(doc.clone()).unwrap();
    assert_eq!(serde_json::to_value(&root).unwrap(), doc);

    let text = serde_json::to_string_pretty(&root).unwrap();
    let again: Root = serde_json::from_str(&text).unwrap();
    assert_eq!(again, root);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let cluster: ResourceCluster =
        serde_json::from_value(json!({"spark_version": "x", "not_in_schema": true})).unwrap();
    assert_eq!(cluster.spark_version, "x");
}

#[test]
fn test_records_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Root>();
    assert_send_sync::<ResourceJob>();
}
