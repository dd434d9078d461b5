// tests/integration_test.rs
use std::process::Command;

use git_version_builder::{parse, render, Format, VersionInfo};

fn git_version() -> Command {
    Command::new(env!("CARGO_BIN_EXE_git-version"))
}

#[test]
fn test_git_version_help() {
    let output = git_version()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-version"));
    assert!(stdout.contains("Generate version constants"));
}

#[test]
fn test_git_version_version() {
    let output = git_version()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_dev_string_composition() {
    let info = VersionInfo::tagged("versionone", 2, "230a").unwrap();
    let text = render(&info, Format::Cpp);
    assert!(text.contains(r#"VERSION_STRING = "versionone-dev2-230a";"#));
}

#[test]
fn test_stable_plain_scenario() {
    let info = VersionInfo::tagged("v1.0", 0, "230a").unwrap();
    let text = render(&info, Format::Python);

    assert!(text.contains("VERSION_STRING = \"v1.0\"\n"));
    assert!(text.contains("IS_DEV_VERSION = False\n"));
    assert!(text.contains("IS_STABLE_VERSION = True\n"));
    assert!(text.contains("VERSION_COMPONENTS = [\"1\", \"0\"]\n"));
    assert!(text.contains("VERSION_TAG = \"\"\n"));
}

#[test]
fn test_tag_with_suffix_scenario() {
    let info = VersionInfo::tagged("1.6-alpha", 2, "230a").unwrap();
    let text = render(&info, Format::Python);

    assert!(text.contains("VERSION_STRING = \"1.6-alpha-dev2-230a\"\n"));
    assert!(text.contains("VERSION_COMPONENTS = [\"1\", \"6\"]\n"));
    assert!(text.contains("VERSION_TAG = \"alpha\"\n"));
}

#[test]
fn test_sentinel_suppression() {
    let cases = [
        VersionInfo::untagged(2, "230a").unwrap(),
        VersionInfo::untagged(0, "230a").unwrap(),
        VersionInfo::untagged(5, "230a").unwrap().with_dirty(true),
        VersionInfo::tagged("develop", 0, "230a").unwrap(),
    ];
    for info in cases {
        for format in Format::ALL {
            let text = render(&info, format);
            assert!(!text.contains("IS_STABLE_VERSION"), "{}", text);
            assert!(text.contains("\"develop"), "{}", text);
        }
    }
}

#[test]
fn test_parse_then_render() {
    let info = parse("1.06-3-g0abc123-dirty", None).expect("Should parse");
    let text = render(&info, Format::Cpp);

    assert!(text.contains(r#"VERSION_STRING = "1.06-dev3-0abc123";"#));
    assert!(text.contains(r#"VERSION_COMPONENTS[] = {"1", "06"};"#));
    assert!(text.contains("IS_DEV_VERSION = true;"));
}

#[cfg(test)]
mod git_operations_tests {
    use super::*;
    use git2::{Oid, Repository, Signature};
    use git_version_builder::git::{Git2Repository, Repository as _};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn signature() -> Signature<'static> {
        Signature::now("Test User", "test@example.com").expect("Could not create signature")
    }

    fn commit(repo: &Repository, dir: &Path, content: &str, message: &str) -> Oid {
        let content_path = dir.join("README.md");
        fs::write(&content_path, content).expect("Could not write file");

        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = repo.find_tree(tree_id).expect("Could not find tree");

        let parent = repo.head().ok().map(|h| h.peel_to_commit().unwrap());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature(),
            &signature(),
            message,
            &tree,
            &parents,
        )
        .expect("Could not create commit")
    }

    // Helper function to setup a temporary git repo: tag v1.0 followed by one commit
    fn setup_test_repo() -> (TempDir, Oid) {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        let first = commit(&repo, temp_dir.path(), "Initial content\n", "Initial commit");
        repo.tag_lightweight("v1.0", &repo.find_object(first, None).unwrap(), false)
            .expect("Could not create tag");
        let head = commit(&repo, temp_dir.path(), "Updated content\n", "Second commit");

        (temp_dir, head)
    }

    #[test]
    fn test_describe_commits_after_tag() {
        let (temp_dir, head) = setup_test_repo();
        let repo = Git2Repository::open(temp_dir.path()).unwrap();

        let output = repo.describe_head(7).unwrap();
        assert_eq!(output.tag_name.as_deref(), Some("v1.0"));
        assert!(
            output.description.starts_with("v1.0-1-g"),
            "unexpected description {}",
            output.description
        );

        let info = output.parse().unwrap();
        assert_eq!(info.commits_since_tag(), 1);
        assert!(head.to_string().starts_with(info.commit_id()));
        assert!(!info.is_dirty());
        assert_eq!(
            info.version_string(),
            format!("v1.0-dev1-{}", info.commit_id())
        );
    }

    #[test]
    fn test_describe_exact_tag() {
        let (temp_dir, head) = setup_test_repo();
        {
            let repo = Repository::open(temp_dir.path()).unwrap();
            let sig = signature();
            repo.tag(
                "v1.1-stable",
                &repo.find_object(head, None).unwrap(),
                &sig,
                "Release 1.1",
                false,
            )
            .expect("Could not create annotated tag");
        }

        let repo = Git2Repository::open(temp_dir.path()).unwrap();
        let info = repo.describe_head(7).unwrap().parse().unwrap();

        assert_eq!(info.tag(), Some("v1.1-stable"));
        assert_eq!(info.commits_since_tag(), 0);
        assert!(!info.is_dev_version());
        assert_eq!(info.is_stable_version(), Some(true));
        assert_eq!(info.version_string(), "v1.1-stable");
    }

    #[test]
    fn test_describe_dirty_tree() {
        let (temp_dir, _) = setup_test_repo();
        fs::write(temp_dir.path().join("README.md"), "Local edit, longer than before\n")
            .expect("Could not modify file");

        let repo = Git2Repository::open(temp_dir.path()).unwrap();
        let output = repo.describe_head(7).unwrap();
        assert!(output.description.ends_with("-dirty"));

        let info = output.parse().unwrap();
        assert!(info.is_dirty());
        assert!(info.is_dev_version());
    }

    #[test]
    fn test_describe_untracked_file_is_not_dirty() {
        let (temp_dir, _) = setup_test_repo();
        fs::write(temp_dir.path().join("version.h"), "generated\n").unwrap();

        let repo = Git2Repository::open(temp_dir.path()).unwrap();
        let info = repo.describe_head(7).unwrap().parse().unwrap();
        assert!(!info.is_dirty());
    }

    #[test]
    fn test_describe_without_tags() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        commit(&repo, temp_dir.path(), "a\n", "first");
        commit(&repo, temp_dir.path(), "b\n", "second");
        let head = commit(&repo, temp_dir.path(), "c\n", "third");

        let repo = Git2Repository::open(temp_dir.path()).unwrap();
        let output = repo.describe_head(7).unwrap();
        assert_eq!(output.tag_name, None);

        let info = output.parse().unwrap();
        assert_eq!(info.tag(), None);
        assert_eq!(info.tag_name(), "develop");
        assert_eq!(info.commits_since_tag(), 3);
        assert_eq!(info.commit_id(), &head.to_string()[..7]);

        let text = render(&info, Format::Cpp);
        assert!(!text.contains("IS_STABLE_VERSION"));
    }

    #[test]
    fn test_open_outside_repository() {
        let temp_dir = TempDir::new().unwrap();
        // A fresh temp dir may still sit inside some repository; only check a
        // missing path is rejected.
        assert!(Git2Repository::open(temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_cli_writes_file_once() {
        let (temp_dir, _) = setup_test_repo();
        let out_dir = TempDir::new().unwrap();
        let header = out_dir.path().join("include").join("version.h");

        let run = || {
            git_version()
                .arg("--repo")
                .arg(temp_dir.path())
                .arg("--output")
                .arg(&header)
                .arg("--lang")
                .arg("cpp")
                .output()
                .expect("Failed to execute command")
        };

        let first = run();
        assert!(
            first.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&first.stderr)
        );
        let content = fs::read_to_string(&header).expect("header should be written");
        assert!(content.contains("#ifndef MESSMER_GITVERSION_VERSION_H"));
        assert!(content.contains(r#"GIT_TAG_NAME = "v1.0";"#));

        let second = run();
        assert!(second.status.success());
        assert!(String::from_utf8_lossy(&second.stderr).contains("is up to date"));
        assert_eq!(fs::read_to_string(&header).unwrap(), content);

        let check = git_version()
            .arg("--repo")
            .arg(temp_dir.path())
            .arg("--output")
            .arg(&header)
            .arg("--check")
            .output()
            .expect("Failed to execute command");
        assert!(check.status.success());
    }

    #[test]
    fn test_cli_check_fails_when_stale() {
        let (temp_dir, _) = setup_test_repo();
        let out_dir = TempDir::new().unwrap();
        let module = out_dir.path().join("version.py");
        fs::write(&module, "VERSION_STRING = \"old\"\n").unwrap();

        let output = git_version()
            .arg("--repo")
            .arg(temp_dir.path())
            .arg("--output")
            .arg(&module)
            .arg("--check")
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            fs::read_to_string(&module).unwrap(),
            "VERSION_STRING = \"old\"\n"
        );
    }

    #[test]
    fn test_cli_stdout_python() {
        let (temp_dir, _) = setup_test_repo();

        let output = git_version()
            .arg("--repo")
            .arg(temp_dir.path())
            .arg("--lang")
            .arg("python")
            .arg("--stdout")
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("# ---"));
        assert!(stdout.contains("IS_DEV_VERSION = True\n"));
        assert!(stdout.contains("VERSION_COMPONENTS = [\"1\", \"0\"]\n"));
    }

    #[test]
    fn test_cli_unsupported_lang() {
        let (temp_dir, _) = setup_test_repo();

        let output = git_version()
            .arg("--repo")
            .arg(temp_dir.path())
            .arg("--lang")
            .arg("java")
            .arg("--stdout")
            .output()
            .expect("Failed to execute command");

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unsupported output format: java"));
    }
}
