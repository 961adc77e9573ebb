//! Filesystem mutation primitives: create, delete, rename, move, copy, zip
//! and unzip.

mod common;

use std::fs;

use common::{cwd_lock, mkdir, scratch, touch};
use steep::fs::dirfs;

#[test]
fn creates_files_and_directories_in_the_working_directory() {
    let _guard = cwd_lock();
    let scratch = scratch();
    std::env::set_current_dir(&scratch.path).unwrap();

    dirfs::create_file("report.txt").expect("create_file failed");
    dirfs::create_directory("archive").expect("create_directory failed");

    assert!(scratch.path.join("report.txt").is_file());
    assert!(scratch.path.join("archive").is_dir());
}

#[test]
fn creating_an_existing_file_fails() {
    let _guard = cwd_lock();
    let scratch = scratch();
    std::env::set_current_dir(&scratch.path).unwrap();
    touch(&scratch.path.join("taken.txt"));

    assert!(dirfs::create_file("taken.txt").is_err());
}

#[test]
fn delete_handles_both_files_and_directory_trees() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let file = scratch.path.join("ephemeral.txt");
    touch(&file);
    let tree = scratch.path.join("tree");
    mkdir(&tree);
    touch(&tree.join("leaf.txt"));

    dirfs::delete_item(&file).expect("file delete failed");
    dirfs::delete_item(&tree).expect("directory delete failed");

    assert!(!file.exists());
    assert!(!tree.exists());
}

#[test]
fn rename_keeps_the_entry_in_its_directory() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let nested = scratch.path.join("nested");
    mkdir(&nested);
    touch(&nested.join("old.txt"));

    dirfs::rename_item(&nested.join("old.txt"), "new.txt").expect("rename failed");

    assert!(!nested.join("old.txt").exists());
    assert!(nested.join("new.txt").is_file());
}

#[test]
fn move_relocates_across_directories() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let source = scratch.path.join("wandering.txt");
    touch(&source);
    let target_dir = scratch.path.join("destination");
    mkdir(&target_dir);

    dirfs::move_item(&source, &target_dir.join("wandering.txt")).expect("move failed");

    assert!(!source.exists());
    assert!(target_dir.join("wandering.txt").is_file());
}

#[test]
fn copying_a_file_appends_a_copy_suffix_before_the_extension() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let original = scratch.path.join("data.csv");
    fs::write(&original, b"a,b,c\n").unwrap();

    dirfs::copy_item(&original).expect("copy failed");

    let copy = scratch.path.join("data_copy.csv");
    assert!(copy.is_file());
    assert_eq!(fs::read(&copy).unwrap(), fs::read(&original).unwrap());
}

#[test]
fn copying_a_directory_copies_the_whole_tree() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let tree = scratch.path.join("project");
    mkdir(&tree);
    mkdir(&tree.join("src"));
    fs::write(tree.join("src").join("lib.rs"), b"pub fn noop() {}\n").unwrap();

    dirfs::copy_item(&tree).expect("directory copy failed");

    let copy = scratch.path.join("project_copy");
    assert!(copy.is_dir());
    assert!(copy.join("src").join("lib.rs").is_file());
}

#[test]
fn zip_then_unzip_restores_the_tree() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let tree = scratch.path.join("bundle");
    mkdir(&tree);
    fs::write(tree.join("a.txt"), b"alpha").unwrap();
    mkdir(&tree.join("deep"));
    fs::write(tree.join("deep").join("b.txt"), b"beta").unwrap();

    dirfs::zip_item(&tree).expect("zip failed");
    let archive = scratch.path.join("bundle.zip");
    assert!(archive.is_file());

    // Extracts next to the archive, into a directory named after it.
    fs::remove_dir_all(&tree).unwrap();
    dirfs::unzip_item(&archive).expect("unzip failed");

    let restored = scratch.path.join("bundle");
    assert_eq!(fs::read(restored.join("bundle").join("a.txt")).unwrap(), b"alpha");
    assert_eq!(
        fs::read(restored.join("bundle").join("deep").join("b.txt")).unwrap(),
        b"beta"
    );
}

#[test]
fn zipping_a_single_file_stores_just_that_file() {
    let _guard = cwd_lock();
    let scratch = scratch();
    let file = scratch.path.join("solo.txt");
    fs::write(&file, b"alone").unwrap();

    dirfs::zip_item(&file).expect("zip failed");
    let archive = scratch.path.join("solo.txt.zip");
    assert!(archive.is_file());

    // Extraction lands in a directory named after the archive stem.
    fs::remove_file(&file).unwrap();
    dirfs::unzip_item(&archive).expect("unzip failed");
    let extracted = scratch.path.join("solo.txt").join("solo.txt");
    assert_eq!(fs::read(extracted).unwrap(), b"alone");
}
