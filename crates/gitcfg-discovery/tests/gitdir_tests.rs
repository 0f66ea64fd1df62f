use std::fs;

use gitcfg_discovery::{Error, find_git_config, find_git_dir, is_git_dir};
use gitcfg_fs::MapEnv;
use gitcfg_test_utils::git::{
    fake_control_dir, fake_git_dir, gitdir_file, real_bare_repo, real_git_repo,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn env_at(dir: &std::path::Path) -> MapEnv {
    MapEnv::new().with_windows(false).with_current_dir(dir)
}

#[test]
fn test_finds_dot_git_at_root() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());

    let env = env_at(temp.path());
    let found = find_git_dir(&env, temp.path()).unwrap();
    assert_eq!(found, temp.path().join(".git"));
}

#[test]
fn test_nested_start_finds_same_dir() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());
    let nested = temp.path().join("src/deep/er");
    fs::create_dir_all(&nested).unwrap();

    let env = env_at(temp.path());
    let from_root = find_git_dir(&env, temp.path()).unwrap();
    let from_nested = find_git_dir(&env, &nested).unwrap();
    assert_eq!(from_root, from_nested);
}

#[test]
fn test_relative_start_uses_working_directory() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());
    fs::create_dir_all(temp.path().join("a/b")).unwrap();

    let env = env_at(&temp.path().join("a"));
    assert_eq!(
        find_git_dir(&env, "b").unwrap(),
        temp.path().join(".git")
    );
    assert_eq!(
        find_git_dir(&env, "").unwrap(),
        temp.path().join(".git")
    );
}

#[test]
fn test_start_with_parent_components() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());
    fs::create_dir_all(temp.path().join("a/b")).unwrap();

    let env = env_at(temp.path());
    let start = temp.path().join("a/b/../b/./");
    assert_eq!(
        find_git_dir(&env, start).unwrap(),
        temp.path().join(".git")
    );
}

#[test]
fn test_bare_repository_is_its_own_git_dir() {
    let temp = TempDir::new().unwrap();
    let bare = temp.path().join("project.git");
    fake_control_dir(&bare, "[core]\n\tbare = true\n");
    fs::create_dir_all(bare.join("refs/heads/feature")).unwrap();

    let env = env_at(temp.path());
    assert_eq!(find_git_dir(&env, &bare).unwrap(), bare);
    assert_eq!(
        find_git_dir(&env, bare.join("refs/heads/feature")).unwrap(),
        bare
    );
}

#[test]
fn test_corrupt_dot_git_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".git/objects/pack")).unwrap();
    fs::write(temp.path().join(".git/config"), "").unwrap();

    let env = env_at(temp.path());
    match find_git_dir(&env, temp.path()) {
        Err(Error::CorruptGitDir { path }) => assert_eq!(path, temp.path().join(".git")),
        other => panic!("expected CorruptGitDir, got {other:?}"),
    }
}

#[test]
fn test_corrupt_inner_repo_shadows_outer() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());
    let inner = temp.path().join("vendor/lib");
    fs::create_dir_all(inner.join(".git")).unwrap();

    let env = env_at(temp.path());
    assert!(matches!(
        find_git_dir(&env, &inner),
        Err(Error::CorruptGitDir { .. })
    ));
}

#[test]
fn test_redirect_relative_to_file_not_cwd() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fake_control_dir(&root.join("other/.git"), "");
    gitdir_file(&root.join("checkout"), "../other/.git");
    let elsewhere = root.join("elsewhere");
    fs::create_dir(&elsewhere).unwrap();

    let env = env_at(&elsewhere);
    let found = find_git_dir(&env, root.join("checkout")).unwrap();
    assert_eq!(found, root.join("other/.git"));
}

#[test]
fn test_redirect_absolute_target() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let modules = root.join("super/.git/modules/sub");
    fake_control_dir(&modules, "");
    gitdir_file(&root.join("super/sub"), &modules.to_string_lossy());
    fs::create_dir_all(root.join("super/sub/src")).unwrap();

    let env = env_at(root);
    assert_eq!(
        find_git_dir(&env, root.join("super/sub/src")).unwrap(),
        modules
    );
}

#[test]
fn test_redirect_trims_whitespace() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fake_control_dir(&root.join("real"), "");
    fs::create_dir(root.join("wt")).unwrap();
    fs::write(root.join("wt/.git"), "gitdir:   ../real  \r\n").unwrap();

    let env = env_at(root);
    assert_eq!(find_git_dir(&env, root.join("wt")).unwrap(), root.join("real"));
}

#[test]
fn test_redirect_to_invalid_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("not-a-repo")).unwrap();
    gitdir_file(&root.join("wt"), "../not-a-repo");

    let env = env_at(root);
    match find_git_dir(&env, root.join("wt")) {
        Err(Error::CorruptGitDirTarget { file, target }) => {
            assert_eq!(file, root.join("wt/.git"));
            assert_eq!(target, root.join("not-a-repo"));
        }
        other => panic!("expected CorruptGitDirTarget, got {other:?}"),
    }
}

#[test]
fn test_redirect_without_prefix() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("wt")).unwrap();
    fs::write(root.join("wt/.git"), "../real\n").unwrap();

    let env = env_at(root);
    assert!(matches!(
        find_git_dir(&env, root.join("wt")),
        Err(Error::BadGitDirFile { .. })
    ));
}

#[test]
fn test_empty_redirect_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("wt")).unwrap();
    fs::write(root.join("wt/.git"), "").unwrap();

    let env = env_at(root);
    assert!(matches!(
        find_git_dir(&env, root.join("wt")),
        Err(Error::BadGitDirFile { .. })
    ));
}

#[test]
fn test_not_in_git_dir() {
    let temp = TempDir::new().unwrap();
    let start = temp.path().join("plain/dir");
    fs::create_dir_all(&start).unwrap();

    // Guard against a repository enclosing the temp directory
    let env = env_at(temp.path());
    if find_git_dir(&env, std::env::temp_dir()).is_ok() {
        return;
    }

    match find_git_dir(&env, &start) {
        Err(Error::NotInGitDir { start: reported }) => assert_eq!(reported, start),
        other => panic!("expected NotInGitDir, got {other:?}"),
    }
}

#[test]
fn test_find_git_config() {
    let temp = TempDir::new().unwrap();
    fake_git_dir(temp.path());

    let env = env_at(temp.path());
    assert_eq!(
        find_git_config(&env, temp.path()).unwrap(),
        temp.path().join(".git/config")
    );
}

#[test]
fn test_relative_start_without_cwd_fails() {
    let env = MapEnv::new();
    assert!(matches!(
        find_git_dir(&env, "relative"),
        Err(Error::Fs(gitcfg_fs::Error::CurrentDir(_)))
    ));
}

// ============================================================================
// Real repositories created by libgit2
// ============================================================================

#[test]
fn test_real_repository_matches_git2() {
    let temp = TempDir::new().unwrap();
    let repo = real_git_repo(temp.path());
    assert!(is_git_dir(repo.path()));

    let nested = temp.path().join("crates/inner");
    fs::create_dir_all(&nested).unwrap();

    let env = env_at(temp.path());
    let found = find_git_dir(&env, &nested).unwrap();
    assert_eq!(
        found.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_real_bare_repository() {
    let temp = TempDir::new().unwrap();
    let bare = temp.path().join("bare.git");
    let repo = real_bare_repo(&bare);

    let env = env_at(temp.path());
    let found = find_git_dir(&env, &bare).unwrap();
    assert_eq!(
        found.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_submodule_style_redirect_to_real_repository() {
    let temp = TempDir::new().unwrap();
    let modules = temp.path().join("super/.git/modules/lib");
    real_bare_repo(&modules);
    gitdir_file(&temp.path().join("super/lib"), "../.git/modules/lib");

    let env = env_at(temp.path());
    let found = find_git_dir(&env, temp.path().join("super/lib")).unwrap();
    assert_eq!(found, modules);
}
