use databricks_tfschema::one_of::{InitScriptSource, TaskKind};
use databricks_tfschema::schema::*;

fn main() -> Result<(), serde_json::Error> {
    let mut root = Root::new();
    if let Some(provider) = root.provider.databricks.as_mut() {
        provider.host = Some("https://adb-1234567890123456.7.azuredatabricks.net".to_string());
    }

    root.data.spark_version.insert(
        "lts".to_string(),
        DataSourceSparkVersion {
            long_term_support: Some(true),
            ..Default::default()
        },
    );

    root.resource.cluster.insert(
        "shared".to_string(),
        ResourceCluster {
            cluster_name: Some("shared-autoscaling".to_string()),
            spark_version: "${data.databricks_spark_version.lts.id}".to_string(),
            autotermination_minutes: Some(20),
            autoscale: Some(ResourceClusterAutoscale {
                min_workers: Some(1),
                max_workers: Some(4),
            }),
            init_scripts: Some(vec![InitScriptSource::Workspace(
                ResourceClusterInitScriptsWorkspace {
                    destination: "/Shared/init/install-deps.sh".to_string(),
                },
            )
            .into()]),
            ..Default::default()
        },
    );

    let mut ingest = ResourceJobTask {
        task_key: "ingest".to_string(),
        existing_cluster_id: Some("${databricks_cluster.shared.id}".to_string()),
        ..Default::default()
    };
    ingest.set_one_of(TaskKind::Notebook(ResourceJobTaskNotebookTask {
        notebook_path: "/Shared/ingest".to_string(),
        ..Default::default()
    }));
    root.resource.job.insert(
        "nightly".to_string(),
        ResourceJob {
            name: Some("nightly-ingest".to_string()),
            task: Some(vec![ingest]),
            ..Default::default()
        },
    );

    println!("{}", serde_json::to_string_pretty(&root)?);

    let parsed: Root = serde_json::from_str(&serde_json::to_string(&root)?)?;
    assert_eq!(parsed, root);
    Ok(())
}
