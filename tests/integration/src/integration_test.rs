//! End-to-end integration tests against libgit2
//!
//! These tests exercise the complete flow (discovery -> parsing -> layered
//! merge) on repositories and config files produced or read by `git2`, so
//! that our reading of the format is checked against an independent
//! implementation.

use std::fs;

use gitcfg_core::{ConfigResolver, Scope};
use gitcfg_discovery::find_git_dir;
use gitcfg_fs::MapEnv;
use gitcfg_store::parse;
use gitcfg_test_utils::git::{gitdir_file, real_bare_repo};
use gitcfg_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE: &str = r#"# leading comment
[core]
	editor = "code --wait"   ; trailing comment
	pager = less -R # another comment
	autocrlf = input
[alias]
	quoted = "say \"hi\"\tnow"
	semi = "a;b#c"
[http "https://example.com"]
	sslverify = false
[feature]
	enabled
	count = 42
"#;

fn resolver(repo: &TestRepo) -> ConfigResolver<MapEnv> {
    ConfigResolver::with_env(repo.work(), repo.env())
}

#[test]
fn test_parser_agrees_with_libgit2() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sample.gitconfig");
    fs::write(&path, SAMPLE).unwrap();

    let ours = parse(SAMPLE.as_bytes(), "sample.gitconfig").unwrap().store;
    let theirs = git2::Config::open(&path).unwrap();

    for key in [
        "core.editor",
        "core.pager",
        "core.autocrlf",
        "alias.quoted",
        "alias.semi",
        "http.https://example.com.sslverify",
        "feature.count",
    ] {
        assert_eq!(
            ours.get(key),
            theirs.get_string(key).unwrap(),
            "value of {key}"
        );
    }

    assert_eq!(
        ours.get_bool("feature.enabled", false).unwrap(),
        theirs.get_bool("feature.enabled").unwrap()
    );
    assert_eq!(
        ours.get_bool("http.https://example.com.sslverify", true).unwrap(),
        theirs.get_bool("http.https://example.com.sslverify").unwrap()
    );
    assert_eq!(
        ours.get_int64("feature.count", 0).unwrap(),
        theirs.get_i64("feature.count").unwrap()
    );
}

#[test]
fn test_reads_values_written_by_libgit2() {
    let repo = TestRepo::new();
    repo.init_real_git();

    {
        let mut config = git2::Config::open(&repo.local_config()).unwrap();
        config.set_str("user.name", "Libgit Author").unwrap();
        config.set_str("alias.greet", "echo \"hi\" # not a comment").unwrap();
        config.set_str("remote.origin.url", "https://example.com/repo.git").unwrap();
        config.set_bool("core.sparsecheckout", true).unwrap();
        config.set_i64("pack.threads", 4).unwrap();
    }

    let resolved = resolver(&repo).resolve().unwrap();
    let store = &resolved.store;

    assert_eq!(store.get("user.name"), "Libgit Author");
    assert_eq!(store.get("alias.greet"), "echo \"hi\" # not a comment");
    assert_eq!(store.get("remote.origin.url"), "https://example.com/repo.git");
    assert!(store.get_bool("core.sparsecheckout", false).unwrap());
    assert_eq!(store.get_int64("pack.threads", 0).unwrap(), 4);

    // Written by git2 during init
    assert!(!store.get_bool("core.bare", true).unwrap());
    assert_eq!(store.get_int("core.repositoryformatversion", -1).unwrap(), 0);
}

#[test]
fn test_layers_over_real_repository() {
    let repo = TestRepo::new();
    let git = repo.init_real_git();
    repo.write_system_config("[user]\n\tname = System\n[color]\n\tui = never\n");
    repo.write_global_config("[user]\n\tname = Global\n\temail = g@example.com\n");
    {
        let mut config = git2::Config::open(&repo.local_config()).unwrap();
        config.set_str("user.name", "Local").unwrap();
    }

    let nested = repo.mkdir("work/src/bin");
    let resolved = ConfigResolver::with_env(&nested, repo.env())
        .resolve()
        .unwrap();

    assert_eq!(resolved.store.get("user.name"), "Local");
    assert_eq!(resolved.store.get("user.email"), "g@example.com");
    assert_eq!(resolved.store.get("color.ui"), "never");
    assert_eq!(
        resolved.store.get_all("user.name").unwrap(),
        vec!["System", "Global", "Local"]
    );

    let git_dir = resolved.git_dir.unwrap();
    assert_eq!(
        git_dir.canonicalize().unwrap(),
        git.path().canonicalize().unwrap()
    );

    let scopes: Vec<Scope> = resolved.sources.iter().map(|s| s.scope).collect();
    assert_eq!(scopes, vec![Scope::SYSTEM, Scope::GLOBAL, Scope::LOCAL]);
}

#[test]
fn test_separate_git_dir_layout() {
    let repo = TestRepo::new();
    let control = repo.root().join("store/project.git");
    real_bare_repo(&control);
    {
        let mut config = git2::Config::open(&control.join("config")).unwrap();
        config.set_str("user.name", "Separated").unwrap();
    }
    gitdir_file(&repo.work(), &control.to_string_lossy());

    let resolved = resolver(&repo).resolve().unwrap();
    assert_eq!(resolved.git_dir, Some(control.clone()));
    assert_eq!(resolved.store.get("user.name"), "Separated");
    assert_eq!(
        resolved.sources.last().map(|s| s.path.clone()),
        Some(control.join("config"))
    );
}

#[test]
fn test_include_chain_across_layers() {
    let repo = TestRepo::new();
    repo.init_real_git();
    repo.write_file("home/.config/git/identity", "[user]\n\tsigningkey = ABC123\n");
    repo.write_global_config("[include]\n\tpath = ~/.config/git/identity\n");
    repo.write_file("work/.git/team.inc", "[user]\n\tsigningkey = TEAM\n");
    {
        let mut config = git2::Config::open(&repo.local_config()).unwrap();
        config.set_str("include.path", "team.inc").unwrap();
    }

    let resolved = resolver(&repo).resolve().unwrap();
    let values: Vec<_> = resolved
        .store
        .get_raw("user.signingkey")
        .unwrap()
        .iter()
        .map(|v| (v.value().to_string(), v.scope()))
        .collect();

    assert_eq!(
        values,
        vec![
            ("ABC123".to_string(), Scope::GLOBAL | Scope::INCLUDE),
            ("TEAM".to_string(), Scope::LOCAL | Scope::INCLUDE),
        ]
    );
    assert_eq!(resolved.store.get("user.signingkey"), "TEAM");
}

#[test]
fn test_discovery_agrees_with_libgit2() {
    let repo = TestRepo::new();
    let git = repo.init_real_git();
    let nested = repo.mkdir("work/src/deep");
    let bare = real_bare_repo(&repo.root().join("mirror.git"));
    let env = repo.env();

    for (start, expected) in [
        (repo.work(), git.path().to_path_buf()),
        (nested.clone(), git.path().to_path_buf()),
        (bare.path().join("refs/heads"), bare.path().to_path_buf()),
    ] {
        let ours = find_git_dir(&env, &start).unwrap();
        let theirs = git2::Repository::discover(&start).unwrap();

        assert_eq!(
            ours.canonicalize().unwrap(),
            theirs.path().canonicalize().unwrap(),
            "git dir discovered from {}",
            start.display()
        );
        assert_eq!(
            ours.canonicalize().unwrap(),
            expected.canonicalize().unwrap()
        );
    }
}
