//! GitHub Actions provenance: in-toto Statement v1 carrying a SLSA v1
//! predicate, populated from the `GITHUB_*` / `RUNNER_*` variables the
//! Actions runner exposes.

use crate::ci::Environment;
use crate::in_toto::{INTOTO_STATEMENT_V1_TYPE, Statement};
use crate::slsa::{Builder, SLSA_PREDICATE_V1_TYPE};
use crate::subject::Subject;
use serde::Serialize;

/// Builder id prefix for the hosted GitHub Actions runner; the runner
/// environment (`github-hosted` or `self-hosted`) is appended per statement.
pub const GITHUB_BUILDER_ID_PREFIX: &str = "https://github.com/actions/runner";

/// SLSA build type URI for workflow-triggered GitHub Actions builds.
pub const GITHUB_BUILD_TYPE: &str =
    "https://slsa-framework.github.io/github-actions-buildtypes/workflow/v1";

/// SLSA v1 provenance predicate for a GitHub Actions build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubPredicate {
    pub build_definition: BuildDefinition,
    pub run_details: RunDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefinition {
    pub build_type: &'static str,
    pub external_parameters: ExternalParameters,
    pub internal_parameters: InternalParameters,
    pub resolved_dependencies: Vec<ResolvedDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalParameters {
    pub workflow: Workflow,
}

/// The workflow that produced the build, split out of `GITHUB_WORKFLOW_REF`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    #[serde(rename = "ref")]
    pub workflow_ref: String,
    pub repository: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalParameters {
    pub github: GitHubContext,
}

/// Trigger context copied directly from the runner environment. Keys stay
/// snake_case to match the GitHub event payload naming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GitHubContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_owner_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDependency {
    pub uri: String,
    pub digest: GitCommitDigest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GitCommitDigest {
    #[serde(rename = "gitCommit", skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunDetails {
    pub builder: Builder,
    pub metadata: BuildMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    pub invocation_id: String,
}

/// Build the complete v1 statement for a GitHub Actions run.
///
/// Pure function of its inputs; missing environment variables degrade to
/// empty URI segments (or are omitted where the field is optional) rather
/// than failing.
pub(crate) fn build_statement(
    subject: Subject,
    env: &Environment,
) -> Statement<GitHubPredicate> {
    let (workflow_path, workflow_ref) = parse_workflow_ref(env);
    let repository_url = format!(
        "{}/{}",
        env.var("GITHUB_SERVER_URL"),
        env.var("GITHUB_REPOSITORY")
    );

    Statement {
        statement_type: INTOTO_STATEMENT_V1_TYPE,
        subject,
        predicate_type: SLSA_PREDICATE_V1_TYPE,
        predicate: GitHubPredicate {
            build_definition: BuildDefinition {
                build_type: GITHUB_BUILD_TYPE,
                external_parameters: ExternalParameters {
                    workflow: Workflow {
                        workflow_ref,
                        repository: repository_url.clone(),
                        path: workflow_path,
                    },
                },
                internal_parameters: InternalParameters {
                    github: GitHubContext {
                        event_name: env.get("GITHUB_EVENT_NAME").map(str::to_string),
                        repository_id: env.get("GITHUB_REPOSITORY_ID").map(str::to_string),
                        repository_owner_id: env
                            .get("GITHUB_REPOSITORY_OWNER_ID")
                            .map(str::to_string),
                    },
                },
                resolved_dependencies: vec![ResolvedDependency {
                    uri: format!("git+{}@{}", repository_url, env.var("GITHUB_REF")),
                    digest: GitCommitDigest {
                        git_commit: env.get("GITHUB_SHA").map(str::to_string),
                    },
                }],
            },
            run_details: RunDetails {
                builder: Builder {
                    id: format!(
                        "{}/{}",
                        GITHUB_BUILDER_ID_PREFIX,
                        env.var("RUNNER_ENVIRONMENT")
                    ),
                },
                metadata: BuildMetadata {
                    invocation_id: format!(
                        "{}/actions/runs/{}/attempts/{}",
                        repository_url,
                        env.var("GITHUB_RUN_ID"),
                        env.var("GITHUB_RUN_ATTEMPT")
                    ),
                },
            },
        },
    }
}

/// Split `GITHUB_WORKFLOW_REF` into `(workflow_path, workflow_ref)`.
///
/// The variable has the shape `<owner>/<repo>/<path>@<ref>`; the repository
/// prefix is stripped and the remainder split at the first `@`. An absent
/// variable degrades to a split of the empty string, yielding empty path and
/// ref. That permissive behavior is intentional and matches existing
/// consumers.
fn parse_workflow_ref(env: &Environment) -> (String, String) {
    let raw = env.var("GITHUB_WORKFLOW_REF");
    let repository_prefix = format!("{}/", env.var("GITHUB_REPOSITORY"));
    let trimmed = raw.strip_prefix(&repository_prefix).unwrap_or(raw);

    match trimmed.split_once('@') {
        Some((path, workflow_ref)) => (path.to_string(), workflow_ref.to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}
