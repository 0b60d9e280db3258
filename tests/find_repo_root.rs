use gitfab::{find_repo_root, LocateError};
use mktemp::Temp;
use std::fs;

#[test]
fn finds_root_from_nested_dir() {
    let tempdir = Temp::new_dir().unwrap();
    let root = fs::canonicalize(&tempdir).unwrap();

    fs::create_dir(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("sub").join("nested")).unwrap();

    let found = find_repo_root(root.join("sub").join("nested")).unwrap();

    assert_eq!(found, root);
}

#[test]
fn finds_root_from_root_itself() {
    let tempdir = Temp::new_dir().unwrap();
    let root = fs::canonicalize(&tempdir).unwrap();

    fs::create_dir(root.join(".git")).unwrap();

    assert_eq!(find_repo_root(&root).unwrap(), root);
}

#[test]
fn finds_nearest_root() {
    let tempdir = Temp::new_dir().unwrap();
    let outer = fs::canonicalize(&tempdir).unwrap();
    let inner = outer.join("vendor").join("inner");

    fs::create_dir(outer.join(".git")).unwrap();
    fs::create_dir_all(inner.join(".git")).unwrap();
    fs::create_dir_all(inner.join("src")).unwrap();

    assert_eq!(find_repo_root(inner.join("src")).unwrap(), inner);
    assert_eq!(find_repo_root(outer.join("vendor")).unwrap(), outer);
}

#[test]
fn resolves_parent_segments() {
    let tempdir = Temp::new_dir().unwrap();
    let root = fs::canonicalize(&tempdir).unwrap();

    fs::create_dir(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("a").join("b")).unwrap();

    let found = find_repo_root(root.join("a").join("b").join("..")).unwrap();

    assert_eq!(found, root);
}

#[test]
fn git_file_is_not_a_root() {
    let tempdir = Temp::new_dir().unwrap();
    let root = fs::canonicalize(&tempdir).unwrap();
    let worktree = root.join("worktree");

    fs::create_dir(root.join(".git")).unwrap();
    fs::create_dir(&worktree).unwrap();
    fs::write(worktree.join(".git"), "gitdir: /somewhere/else\n").unwrap();

    // The .git file is skipped and the walk carries on upward
    assert_eq!(find_repo_root(&worktree).unwrap(), root);
}

#[test]
fn not_found_without_git_dir() {
    let tempdir = Temp::new_dir().unwrap();
    let start = tempdir.to_path_buf().join("no").join("repo");
    fs::create_dir_all(&start).unwrap();

    let err = find_repo_root(&start).unwrap_err();

    assert!(matches!(err, LocateError::NotFound { .. }));
    assert!(err.to_string().starts_with("not a git repository"));
}

#[cfg(unix)]
#[test]
fn walks_parents_of_symlinked_start() {
    use std::os::unix::fs::symlink;

    let tempdir = Temp::new_dir().unwrap();
    let base = fs::canonicalize(&tempdir).unwrap();
    let work = base.join("work");
    let proj = base.join("elsewhere").join("proj");

    fs::create_dir_all(work.join(".git")).unwrap();
    fs::create_dir_all(proj.join("sub")).unwrap();
    symlink(&proj, work.join("link")).unwrap();

    // The link target has no repo above it, the link itself does
    let found = find_repo_root(work.join("link").join("sub")).unwrap();

    assert_eq!(found, work);
}

#[cfg(unix)]
#[test]
fn git_symlink_is_not_a_root() {
    use std::os::unix::fs::symlink;

    let tempdir = Temp::new_dir().unwrap();
    let outer = fs::canonicalize(&tempdir).unwrap();
    let inner = outer.join("inner");

    fs::create_dir(outer.join(".git")).unwrap();
    fs::create_dir(&inner).unwrap();
    symlink(outer.join(".git"), inner.join(".git")).unwrap();

    assert!(fs::metadata(inner.join(".git")).unwrap().is_dir());
    assert_eq!(find_repo_root(&inner).unwrap(), outer);
}
