//! Sum-type views over records whose blocks are mutually exclusive.
//!
//! The provider encodes "exactly one of" choices (a mount backend, an init
//! script location, a task kind...) as sibling optional blocks. The generated
//! records keep that shape so documents round-trip unchanged; the enums below
//! give callers a typed way to read and set the choice.

use crate::error::OneOfError;
use crate::schema::*;

macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $name:ident for $record:ident {
            $($variant:ident($ty:ty) => $field:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            $($variant($ty),)+
        }

        impl $name {
            /// Key under which the alternative appears in the configuration document.
            pub fn wire_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => stringify!($field),)+
                }
            }
        }

        impl $record {
            /// The populated alternative, if any.
            pub fn one_of(&self) -> Result<Option<$name>, OneOfError> {
                let mut populated = Vec::new();
                let mut choice = None;
                $(
                    if let Some(value) = &self.$field {
                        populated.push(stringify!($field));
                        choice = Some($name::$variant(value.clone()));
                    }
                )+
                if populated.len() > 1 {
                    return Err(OneOfError::Ambiguous {
                        record: stringify!($record),
                        populated,
                    });
                }
                Ok(choice)
            }

            /// Store `choice`, clearing every other alternative.
            pub fn set_one_of(&mut self, choice: $name) {
                $(self.$field = None;)+
                match choice {
                    $($name::$variant(value) => self.$field = Some(value),)+
                }
            }
        }

        impl From<$name> for $record {
            fn from(choice: $name) -> Self {
                let mut record = Self::default();
                record.set_one_of(choice);
                record
            }
        }
    };
}

one_of! {
    /// Storage backend of a `databricks_mount`.
    MountBackend for ResourceMount {
        Abfs(ResourceMountAbfs) => abfs,
        Adl(ResourceMountAdl) => adl,
        Gs(ResourceMountGs) => gs,
        S3(ResourceMountS3) => s3,
        Wasb(ResourceMountWasb) => wasb,
    }
}

one_of! {
    /// Location of a cluster init script.
    InitScriptSource for ResourceClusterInitScripts {
        Abfss(ResourceClusterInitScriptsAbfss) => abfss,
        Dbfs(ResourceClusterInitScriptsDbfs) => dbfs,
        File(ResourceClusterInitScriptsFile) => file,
        Gcs(ResourceClusterInitScriptsGcs) => gcs,
        S3(ResourceClusterInitScriptsS3) => s3,
        Volumes(ResourceClusterInitScriptsVolumes) => volumes,
        Workspace(ResourceClusterInitScriptsWorkspace) => workspace,
    }
}

one_of! {
    /// Package installed on a cluster. Plain variants carry the artifact path.
    ClusterLibrarySource for ResourceClusterLibrary {
        Cran(ResourceClusterLibraryCran) => cran,
        Egg(String) => egg,
        Jar(String) => jar,
        Maven(ResourceClusterLibraryMaven) => maven,
        Pypi(ResourceClusterLibraryPypi) => pypi,
        Requirements(String) => requirements,
        Whl(String) => whl,
    }
}

one_of! {
    /// Work performed by a job task.
    TaskKind for ResourceJobTask {
        Condition(ResourceJobTaskConditionTask) => condition_task,
        Dbt(ResourceJobTaskDbtTask) => dbt_task,
        Notebook(ResourceJobTaskNotebookTask) => notebook_task,
        Pipeline(ResourceJobTaskPipelineTask) => pipeline_task,
        PythonWheel(ResourceJobTaskPythonWheelTask) => python_wheel_task,
        RunJob(ResourceJobTaskRunJobTask) => run_job_task,
        SparkJar(ResourceJobTaskSparkJarTask) => spark_jar_task,
        SparkPython(ResourceJobTaskSparkPythonTask) => spark_python_task,
        SparkSubmit(ResourceJobTaskSparkSubmitTask) => spark_submit_task,
        Sql(ResourceJobTaskSqlTask) => sql_task,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::json;
    use std::fmt::Debug;

    fn assert_round_trip<R>(record: &R)
    where
        R: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let text = serde_json::to_string(record).unwrap();
        let back: R = serde_json::from_str(&text).unwrap();
        assert_eq!(&back, record, "{}", text);
    }

    fn path(name: &str) -> String {
        format!("/Volumes/main/default/{}", name)
    }

    #[test]
    fn test_empty_record_has_no_choice() {
        assert_eq!(ResourceMount::default().one_of(), Ok(None));
        assert_eq!(ResourceJobTask::default().one_of(), Ok(None));
    }

    #[test]
    fn test_single_slot_is_reported() {
        let mount = ResourceMount {
            name: Some("landing".to_string()),
            s3: Some(ResourceMountS3 {
                bucket_name: "landing-bucket".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        match mount.one_of() {
            Ok(Some(MountBackend::S3(s3))) => assert_eq!(s3.bucket_name, "landing-bucket"),
            other => panic!("unexpected choice: {:?}", other),
        }
    }

    #[test]
    fn test_ambiguous_record_is_rejected() {
        let mount = ResourceMount {
            gs: Some(ResourceMountGs::default()),
            s3: Some(ResourceMountS3::default()),
            ..Default::default()
        };
        assert_eq!(
            mount.one_of(),
            Err(OneOfError::Ambiguous {
                record: "ResourceMount",
                populated: vec!["gs", "s3"],
            })
        );
    }

    #[test]
    fn test_set_clears_other_slots() {
        let mut library = ResourceClusterLibrary {
            jar: Some("dbfs:/libs/etl.jar".to_string()),
            pypi: Some(ResourceClusterLibraryPypi {
                package: "requests".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        library.set_one_of(ClusterLibrarySource::Whl(
            "/Workspace/libs/etl-0.1-py3-none-any.whl".to_string(),
        ));
        assert_eq!(library.jar, None);
        assert_eq!(library.pypi, None);
        assert_eq!(
            serde_json::to_value(&library).unwrap(),
            json!({"whl": "/Workspace/libs/etl-0.1-py3-none-any.whl"})
        );
    }

    #[test]
    fn test_from_choice_builds_record() {
        let script: ResourceClusterInitScripts =
            InitScriptSource::Volumes(ResourceClusterInitScriptsVolumes {
                destination: "/Volumes/main/default/scripts/init.sh".to_string(),
            })
            .into();
        assert_eq!(
            serde_json::to_value(&script).unwrap(),
            json!({"volumes": {"destination": "/Volumes/main/default/scripts/init.sh"}})
        );
    }

    #[test]
    fn test_task_kind_keeps_other_fields() {
        let mut task = ResourceJobTask {
            task_key: "ingest".to_string(),
            ..Default::default()
        };
        let kind = TaskKind::Notebook(ResourceJobTaskNotebookTask {
            notebook_path: "/Shared/ingest".to_string(),
            ..Default::default()
        });
        assert_eq!(kind.wire_name(), "notebook_task");
        task.set_one_of(kind.clone());

        assert_eq!(task.task_key, "ingest");
        assert_eq!(task.one_of(), Ok(Some(kind)));
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"task_key": "ingest", "notebook_task": {"notebook_path": "/Shared/ingest"}})
        );
    }

    #[test]
    fn test_mount_backends_round_trip() {
        let choices = vec![
            MountBackend::Abfs(ResourceMountAbfs {
                client_id: "app-id".to_string(),
                client_secret_key: "secret".to_string(),
                client_secret_scope: "scope".to_string(),
                initialize_file_system: true,
                container_name: Some("raw".to_string()),
                ..Default::default()
            }),
            MountBackend::Adl(ResourceMountAdl {
                client_id: "app-id".to_string(),
                client_secret_key: "secret".to_string(),
                client_secret_scope: "scope".to_string(),
                ..Default::default()
            }),
            MountBackend::Gs(ResourceMountGs {
                bucket_name: "raw-events".to_string(),
                service_account: Some("sa@project.iam.gserviceaccount.com".to_string()),
            }),
            MountBackend::S3(ResourceMountS3 {
                bucket_name: "landing".to_string(),
                instance_profile: Some("arn:aws:iam::123:instance-profile/mount".to_string()),
            }),
            MountBackend::Wasb(ResourceMountWasb {
                auth_type: "ACCESS_KEY".to_string(),
                token_secret_key: "key".to_string(),
                token_secret_scope: "scope".to_string(),
                ..Default::default()
            }),
        ];
        for choice in choices {
            let mount = ResourceMount {
                name: Some("landing".to_string()),
                ..ResourceMount::from(choice.clone())
            };
            assert_round_trip(&mount);
            assert_eq!(mount.one_of(), Ok(Some(choice)));
        }
    }

    #[test]
    fn test_init_script_sources_round_trip() {
        let choices = vec![
            InitScriptSource::Abfss(ResourceClusterInitScriptsAbfss {
                destination: "abfss://init@acct.dfs.core.windows.net/a.sh".to_string(),
            }),
            InitScriptSource::Dbfs(ResourceClusterInitScriptsDbfs {
                destination: "dbfs:/init/a.sh".to_string(),
            }),
            InitScriptSource::File(ResourceClusterInitScriptsFile {
                destination: "file:/databricks/a.sh".to_string(),
            }),
            InitScriptSource::Gcs(ResourceClusterInitScriptsGcs {
                destination: "gs://init/a.sh".to_string(),
            }),
            InitScriptSource::S3(ResourceClusterInitScriptsS3 {
                destination: "s3://init/a.sh".to_string(),
                region: Some("us-west-2".to_string()),
                ..Default::default()
            }),
            InitScriptSource::Volumes(ResourceClusterInitScriptsVolumes {
                destination: path("a.sh"),
            }),
            InitScriptSource::Workspace(ResourceClusterInitScriptsWorkspace {
                destination: "/Shared/a.sh".to_string(),
            }),
        ];
        for choice in choices {
            let script = ResourceClusterInitScripts::from(choice.clone());
            assert_round_trip(&script);
            assert_eq!(script.one_of(), Ok(Some(choice)));
        }
    }

    #[test]
    fn test_cluster_library_sources_round_trip() {
        let choices = vec![
            ClusterLibrarySource::Cran(ResourceClusterLibraryCran {
                package: "data.table".to_string(),
                repo: Some("https://cran.r-project.org".to_string()),
            }),
            ClusterLibrarySource::Egg(path("lib.egg")),
            ClusterLibrarySource::Jar(path("lib.jar")),
            ClusterLibrarySource::Maven(ResourceClusterLibraryMaven {
                coordinates: "com.example:etl:1.0.0".to_string(),
                ..Default::default()
            }),
            ClusterLibrarySource::Pypi(ResourceClusterLibraryPypi {
                package: "requests==2.32.3".to_string(),
                repo: None,
            }),
            ClusterLibrarySource::Requirements(path("requirements.txt")),
            ClusterLibrarySource::Whl(path("lib-0.1-py3-none-any.whl")),
        ];
        for choice in choices {
            let library = ResourceClusterLibrary::from(choice.clone());
            assert_round_trip(&library);
            assert_eq!(library.one_of(), Ok(Some(choice)));
        }
    }

    #[test]
    fn test_task_kinds_round_trip() {
        let choices = vec![
            TaskKind::Condition(ResourceJobTaskConditionTask {
                left: "{{job.parameters.mode}}".to_string(),
                op: "EQUAL_TO".to_string(),
                right: "full".to_string(),
            }),
            TaskKind::Dbt(ResourceJobTaskDbtTask {
                commands: vec!["dbt run".to_string()],
                ..Default::default()
            }),
            TaskKind::Notebook(ResourceJobTaskNotebookTask {
                notebook_path: "/Shared/ingest".to_string(),
                ..Default::default()
            }),
            TaskKind::Pipeline(ResourceJobTaskPipelineTask {
                pipeline_id: "pipeline-1".to_string(),
                ..Default::default()
            }),
            TaskKind::PythonWheel(ResourceJobTaskPythonWheelTask {
                package_name: Some("etl".to_string()),
                entry_point: Some("main".to_string()),
                ..Default::default()
            }),
            TaskKind::RunJob(ResourceJobTaskRunJobTask {
                job_id: 42,
                ..Default::default()
            }),
            TaskKind::SparkJar(ResourceJobTaskSparkJarTask {
                main_class_name: Some("com.example.Main".to_string()),
                ..Default::default()
            }),
            TaskKind::SparkPython(ResourceJobTaskSparkPythonTask {
                python_file: path("main.py"),
                ..Default::default()
            }),
            TaskKind::SparkSubmit(ResourceJobTaskSparkSubmitTask {
                parameters: Some(vec!["--class".to_string(), "Main".to_string()]),
            }),
            TaskKind::Sql(ResourceJobTaskSqlTask {
                warehouse_id: "warehouse-1".to_string(),
                ..Default::default()
            }),
        ];
        for choice in choices {
            let mut task = ResourceJobTask {
                task_key: choice.wire_name().to_string(),
                ..Default::default()
            };
            task.set_one_of(choice.clone());
            assert_round_trip(&task);
            assert_eq!(task.one_of(), Ok(Some(choice)));
        }
    }
}
