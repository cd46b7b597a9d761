//! GitLab CI provenance: in-toto Statement v0.1 carrying a SLSA v0.2
//! predicate, populated from the `CI_*` / `GITLAB_*` variables GitLab CI
//! exposes to jobs.

use crate::ci::Environment;
use crate::in_toto::{INTOTO_STATEMENT_V01_TYPE, Statement};
use crate::slsa::{Builder, SLSA_PREDICATE_V02_TYPE};
use crate::subject::Subject;
use serde::Serialize;
use serde_json::{Map, Value};

/// Build type URI prefix and version for GitLab-generated provenance.
pub const GITLAB_BUILD_TYPE_PREFIX: &str = "https://github.com/npm/cli/gitlab";
pub const GITLAB_BUILD_TYPE_VERSION: &str = "v0alpha1";

/// The GitLab CI variables recorded verbatim as `invocation.parameters`.
///
/// This table is part of the wire contract with downstream attestation
/// consumers: the key set is fixed, not derived from whatever the runner
/// happens to expose. It is kept in alphabetical order, which is also the
/// serialization order of the emitted JSON object.
pub const GITLAB_PARAMETER_KEYS: &[&str] = &[
    "CI",
    "CI_API_GRAPHQL_URL",
    "CI_API_V4_URL",
    "CI_BUILD_BEFORE_SHA",
    "CI_BUILD_ID",
    "CI_BUILD_NAME",
    "CI_BUILD_REF",
    "CI_BUILD_REF_NAME",
    "CI_BUILD_REF_SLUG",
    "CI_BUILD_STAGE",
    "CI_COMMIT_BEFORE_SHA",
    "CI_COMMIT_BRANCH",
    "CI_COMMIT_REF_NAME",
    "CI_COMMIT_REF_PROTECTED",
    "CI_COMMIT_REF_SLUG",
    "CI_COMMIT_SHA",
    "CI_COMMIT_SHORT_SHA",
    "CI_COMMIT_TIMESTAMP",
    "CI_COMMIT_TITLE",
    "CI_CONFIG_PATH",
    "CI_DEFAULT_BRANCH",
    "CI_DEPENDENCY_PROXY_DIRECT_GROUP_IMAGE_PREFIX",
    "CI_DEPENDENCY_PROXY_GROUP_IMAGE_PREFIX",
    "CI_DEPENDENCY_PROXY_SERVER",
    "CI_DEPENDENCY_PROXY_USER",
    "CI_JOB_ID",
    "CI_JOB_NAME",
    "CI_JOB_NAME_SLUG",
    "CI_JOB_STAGE",
    "CI_JOB_STARTED_AT",
    "CI_JOB_URL",
    "CI_NODE_TOTAL",
    "CI_PAGES_DOMAIN",
    "CI_PAGES_URL",
    "CI_PIPELINE_CREATED_AT",
    "CI_PIPELINE_ID",
    "CI_PIPELINE_IID",
    "CI_PIPELINE_SOURCE",
    "CI_PIPELINE_URL",
    "CI_PROJECT_CLASSIFICATION_LABEL",
    "CI_PROJECT_DESCRIPTION",
    "CI_PROJECT_ID",
    "CI_PROJECT_NAME",
    "CI_PROJECT_NAMESPACE",
    "CI_PROJECT_NAMESPACE_ID",
    "CI_PROJECT_PATH",
    "CI_PROJECT_PATH_SLUG",
    "CI_PROJECT_REPOSITORY_LANGUAGES",
    "CI_PROJECT_ROOT_NAMESPACE",
    "CI_PROJECT_TITLE",
    "CI_PROJECT_URL",
    "CI_PROJECT_VISIBILITY",
    "CI_REGISTRY",
    "CI_REGISTRY_IMAGE",
    "CI_REGISTRY_USER",
    "CI_RUNNER_DESCRIPTION",
    "CI_RUNNER_ID",
    "CI_RUNNER_TAGS",
    "CI_SERVER_HOST",
    "CI_SERVER_NAME",
    "CI_SERVER_PORT",
    "CI_SERVER_PROTOCOL",
    "CI_SERVER_REVISION",
    "CI_SERVER_SHELL_SSH_HOST",
    "CI_SERVER_SHELL_SSH_PORT",
    "CI_SERVER_URL",
    "CI_SERVER_VERSION",
    "CI_SERVER_VERSION_MAJOR",
    "CI_SERVER_VERSION_MINOR",
    "CI_SERVER_VERSION_PATCH",
    "CI_TEMPLATE_REGISTRY_HOST",
    "GITLAB_CI",
    "GITLAB_FEATURES",
    "GITLAB_USER_ID",
    "GITLAB_USER_LOGIN",
    "RUNNER_GENERATE_ARTIFACTS_METADATA",
];

/// SLSA v0.2 provenance predicate for a GitLab CI build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitLabPredicate {
    pub build_type: String,
    pub builder: Builder,
    pub invocation: Invocation,
    pub metadata: Metadata,
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub config_source: ConfigSource,
    pub parameters: Map<String, Value>,
    pub environment: RunnerEnvironment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSource {
    pub uri: String,
    pub digest: Sha1Digest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sha1Digest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

/// Description of the runner that executed the job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunnerEnvironment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub job: JobRef,
    pub pipeline: PipelineRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub pipeline_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub build_invocation_id: String,
    pub completeness: Completeness,
    pub reproducible: bool,
}

/// Fixed completeness claims: parameters and environment are recorded
/// exhaustively, materials are not, and builds are not reproducible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completeness {
    pub parameters: bool,
    pub environment: bool,
    pub materials: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub uri: String,
    pub digest: Sha1Digest,
}

/// Build the complete v0.1 statement for a GitLab CI job.
///
/// Pure function of its inputs; absent environment variables are omitted
/// from the emitted JSON rather than defaulted.
pub(crate) fn build_statement(
    subject: Subject,
    env: &Environment,
) -> Statement<GitLabPredicate> {
    let project_uri = format!("git+{}", env.var("CI_PROJECT_URL"));
    let commit_digest = Sha1Digest {
        sha1: env.get("CI_COMMIT_SHA").map(str::to_string),
    };

    Statement {
        statement_type: INTOTO_STATEMENT_V01_TYPE,
        subject,
        predicate_type: SLSA_PREDICATE_V02_TYPE,
        predicate: GitLabPredicate {
            build_type: format!("{GITLAB_BUILD_TYPE_PREFIX}/{GITLAB_BUILD_TYPE_VERSION}"),
            builder: Builder {
                id: format!(
                    "{}/-/runners/{}",
                    env.var("CI_PROJECT_URL"),
                    env.var("CI_RUNNER_ID")
                ),
            },
            invocation: Invocation {
                config_source: ConfigSource {
                    uri: project_uri.clone(),
                    digest: commit_digest.clone(),
                    entry_point: env.get("CI_JOB_NAME").map(str::to_string),
                },
                parameters: invocation_parameters(env),
                environment: RunnerEnvironment {
                    name: env.get("CI_RUNNER_DESCRIPTION").map(str::to_string),
                    architecture: env.get("CI_RUNNER_EXECUTABLE_ARCH").map(str::to_string),
                    server: env.get("CI_SERVER_URL").map(str::to_string),
                    project: env.get("CI_PROJECT_PATH").map(str::to_string),
                    job: JobRef {
                        id: env.get("CI_JOB_ID").map(str::to_string),
                    },
                    pipeline: PipelineRef {
                        id: env.get("CI_PIPELINE_ID").map(str::to_string),
                        pipeline_ref: env.get("CI_CONFIG_PATH").map(str::to_string),
                    },
                },
            },
            metadata: Metadata {
                build_invocation_id: env.var("CI_JOB_URL").to_string(),
                completeness: Completeness {
                    parameters: true,
                    environment: true,
                    materials: false,
                },
                reproducible: false,
            },
            materials: vec![Material {
                uri: project_uri,
                digest: commit_digest,
            }],
        },
    }
}

/// Map the fixed parameter-key table against the environment. Keys whose
/// variable is absent are left out of the object entirely.
fn invocation_parameters(env: &Environment) -> Map<String, Value> {
    let mut parameters = Map::new();
    for key in GITLAB_PARAMETER_KEYS {
        if let Some(value) = env.get(key) {
            parameters.insert((*key).to_string(), Value::String(value.to_string()));
        }
    }
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gitlab_env() -> Environment {
        [
            ("GITLAB_CI", "true"),
            ("CI", "true"),
            ("CI_PROJECT_URL", "https://gitlab.com/acme/widget"),
            ("CI_PROJECT_PATH", "acme/widget"),
            ("CI_RUNNER_ID", "42"),
            ("CI_RUNNER_DESCRIPTION", "shared-runner"),
            ("CI_RUNNER_EXECUTABLE_ARCH", "linux/amd64"),
            ("CI_COMMIT_SHA", "f4f78b319c308600eab015a5d6529add21660dc1"),
            ("CI_JOB_ID", "987654"),
            ("CI_JOB_NAME", "build-package"),
            ("CI_JOB_URL", "https://gitlab.com/acme/widget/-/jobs/987654"),
            ("CI_PIPELINE_ID", "13579"),
            ("CI_CONFIG_PATH", ".gitlab-ci.yml"),
            ("CI_SERVER_URL", "https://gitlab.com"),
        ]
        .into_iter()
        .collect()
    }

    fn subject() -> Subject {
        Subject::new("widget-1.0.0.tgz", "sha256", "b".repeat(64))
    }

    #[test]
    fn test_parameter_key_table_is_sorted_and_unique() {
        // Alphabetical order doubles as the JSON serialization order
        let mut sorted = GITLAB_PARAMETER_KEYS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, GITLAB_PARAMETER_KEYS);
    }

    #[test]
    fn test_build_statement_schema_uris() {
        let statement = build_statement(subject(), &gitlab_env());
        assert_eq!(statement.statement_type, INTOTO_STATEMENT_V01_TYPE);
        assert_eq!(statement.predicate_type, SLSA_PREDICATE_V02_TYPE);
        assert_eq!(
            statement.predicate.build_type,
            "https://github.com/npm/cli/gitlab/v0alpha1"
        );
    }

    #[test]
    fn test_build_statement_builder_and_config_source() {
        let statement = build_statement(subject(), &gitlab_env());

        assert_eq!(
            statement.predicate.builder.id,
            "https://gitlab.com/acme/widget/-/runners/42"
        );

        let config_source = &statement.predicate.invocation.config_source;
        assert_eq!(config_source.uri, "git+https://gitlab.com/acme/widget");
        assert_eq!(
            config_source.digest.sha1.as_deref(),
            Some("f4f78b319c308600eab015a5d6529add21660dc1")
        );
        assert_eq!(config_source.entry_point.as_deref(), Some("build-package"));
    }

    #[test]
    fn test_build_statement_parameters_copied_verbatim() {
        let statement = build_statement(subject(), &gitlab_env());
        let parameters = &statement.predicate.invocation.parameters;

        assert_eq!(parameters["CI_JOB_ID"], "987654");
        assert_eq!(parameters["GITLAB_CI"], "true");
        // Absent variables do not appear at all
        assert!(!parameters.contains_key("CI_DEFAULT_BRANCH"));
    }

    #[test]
    fn test_build_statement_runner_environment() {
        let statement = build_statement(subject(), &gitlab_env());
        let environment = &statement.predicate.invocation.environment;

        assert_eq!(environment.name.as_deref(), Some("shared-runner"));
        assert_eq!(environment.architecture.as_deref(), Some("linux/amd64"));
        assert_eq!(environment.server.as_deref(), Some("https://gitlab.com"));
        assert_eq!(environment.project.as_deref(), Some("acme/widget"));
        assert_eq!(environment.job.id.as_deref(), Some("987654"));
        assert_eq!(environment.pipeline.id.as_deref(), Some("13579"));
        assert_eq!(
            environment.pipeline.pipeline_ref.as_deref(),
            Some(".gitlab-ci.yml")
        );
    }

    #[test]
    fn test_build_statement_metadata_constants() {
        let statement = build_statement(subject(), &gitlab_env());
        let metadata = &statement.predicate.metadata;

        assert_eq!(
            metadata.build_invocation_id,
            "https://gitlab.com/acme/widget/-/jobs/987654"
        );
        assert!(metadata.completeness.parameters);
        assert!(metadata.completeness.environment);
        assert!(!metadata.completeness.materials);
        assert!(!metadata.reproducible);
    }

    #[test]
    fn test_build_statement_materials() {
        let statement = build_statement(subject(), &gitlab_env());
        let materials = &statement.predicate.materials;

        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].uri, "git+https://gitlab.com/acme/widget");
        assert_eq!(
            materials[0].digest.sha1.as_deref(),
            Some("f4f78b319c308600eab015a5d6529add21660dc1")
        );
    }

    #[test]
    fn test_build_statement_json_field_names() {
        let statement = build_statement(subject(), &gitlab_env());
        let value = serde_json::to_value(&statement).unwrap();

        assert_eq!(value["_type"], INTOTO_STATEMENT_V01_TYPE);
        assert_eq!(value["predicateType"], SLSA_PREDICATE_V02_TYPE);
        assert_eq!(
            value["predicate"]["invocation"]["configSource"]["entryPoint"],
            "build-package"
        );
        assert_eq!(
            value["predicate"]["invocation"]["parameters"]["CI_JOB_ID"],
            "987654"
        );
        assert_eq!(
            value["predicate"]["metadata"]["buildInvocationId"],
            "https://gitlab.com/acme/widget/-/jobs/987654"
        );
        assert_eq!(
            value["predicate"]["invocation"]["environment"]["pipeline"]["ref"],
            ".gitlab-ci.yml"
        );
    }

    #[test]
    fn test_build_statement_sparse_environment_omits_fields() {
        let env: Environment = [("GITLAB_CI", "true")].into_iter().collect();
        let statement = build_statement(subject(), &env);
        let value = serde_json::to_value(&statement).unwrap();

        let config_source = &value["predicate"]["invocation"]["configSource"];
        assert!(config_source.get("entryPoint").is_none());
        assert!(config_source["digest"].get("sha1").is_none());

        // Only GITLAB_CI is present in the parameter table
        let parameters = value["predicate"]["invocation"]["parameters"]
            .as_object()
            .unwrap();
        assert_eq!(parameters.len(), 1);
        assert!(parameters.contains_key("GITLAB_CI"));
    }
}
