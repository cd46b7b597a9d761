use crate::ci::Environment;
use crate::subject::Subject;

/// Environment snapshot resembling a real GitHub Actions push build.
pub fn github_environment() -> Environment {
    [
        ("GITHUB_ACTIONS", "true"),
        ("GITHUB_SERVER_URL", "https://github.com"),
        ("GITHUB_REPOSITORY", "acme/widget"),
        (
            "GITHUB_WORKFLOW_REF",
            "acme/widget/.github/workflows/publish.yml@refs/heads/main",
        ),
        ("GITHUB_REF", "refs/heads/main"),
        ("GITHUB_SHA", "6dcb09b5b57875f334f61aebed695e2e4193db5e"),
        ("GITHUB_EVENT_NAME", "push"),
        ("GITHUB_REPOSITORY_ID", "558811234"),
        ("GITHUB_REPOSITORY_OWNER_ID", "6811672"),
        ("GITHUB_RUN_ID", "7391353343"),
        ("GITHUB_RUN_ATTEMPT", "1"),
        ("RUNNER_ENVIRONMENT", "github-hosted"),
    ]
    .into_iter()
    .collect()
}

/// Environment snapshot resembling a real GitLab CI job.
pub fn gitlab_environment() -> Environment {
    [
        ("GITLAB_CI", "true"),
        ("CI", "true"),
        ("CI_PROJECT_URL", "https://gitlab.com/acme/widget"),
        ("CI_PROJECT_PATH", "acme/widget"),
        ("CI_RUNNER_ID", "12270837"),
        ("CI_RUNNER_DESCRIPTION", "1-blue.saas-linux-small"),
        ("CI_RUNNER_EXECUTABLE_ARCH", "linux/amd64"),
        ("CI_COMMIT_SHA", "f4f78b319c308600eab015a5d6529add21660dc1"),
        ("CI_JOB_ID", "5727509796"),
        ("CI_JOB_NAME", "publish"),
        (
            "CI_JOB_URL",
            "https://gitlab.com/acme/widget/-/jobs/5727509796",
        ),
        ("CI_PIPELINE_ID", "1083963542"),
        ("CI_CONFIG_PATH", ".gitlab-ci.yml"),
        ("CI_SERVER_URL", "https://gitlab.com"),
        ("CI_DEFAULT_BRANCH", "main"),
    ]
    .into_iter()
    .collect()
}

/// A subject with a fixed digest, for tests that do not touch the filesystem.
pub fn test_subject() -> Subject {
    Subject::new(
        "widget-1.0.0.tgz",
        "sha256",
        "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03",
    )
}
