//! End-to-end tests for the hookshelf binary
//!
//! Each test runs the built binary against a throwaway project with an
//! isolated XDG config directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn hookshelf(project: &Path, xdg: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hookshelf"))
        .args(args)
        .current_dir(project)
        .env("XDG_CONFIG_HOME", xdg)
        .env_remove("HOOKSHELF_PROJECT_CONFIG")
        .output()
        .expect("Failed to run hookshelf")
}

fn ts_project() -> (TempDir, TempDir) {
    let project = TempDir::new().unwrap();
    std::fs::write(project.path().join("package.json"), "{}").unwrap();
    std::fs::write(project.path().join("tsconfig.json"), "{}").unwrap();
    (project, TempDir::new().unwrap())
}

/// Test that hookshelf --help lists the commands
#[test]
fn hookshelf_help_works() {
    let (project, xdg) = ts_project();
    let output = hookshelf(project.path(), xdg.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Copy hook sources"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("list"));
}

/// Test that add copies the hook and its dependencies
#[test]
fn add_copies_hook_with_dependencies() {
    let (project, xdg) = ts_project();
    let output = hookshelf(project.path(), xdg.path(), &["add", "useOnClickOutside"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/hooks/useOnClickOutside/useOnClickOutside.ts"));

    let src = project.path().join("src");
    for path in [
        "utils/isBrowser.ts",
        "hooks/useIsomorphicLayoutEffect/useIsomorphicLayoutEffect.ts",
        "hooks/useEventListener/useEventListener.ts",
        "hooks/useOnClickOutside/useOnClickOutside.ts",
    ] {
        assert!(src.join(path).is_file(), "missing {}", path);
    }
}

/// Test that adding an installed hook again reports it and leaves files alone
#[test]
fn add_twice_reports_already_installed() {
    let (project, xdg) = ts_project();
    assert!(hookshelf(project.path(), xdg.path(), &["add", "useToggle"]).status.success());

    let file = project.path().join("src/hooks/useToggle/useToggle.ts");
    let before = std::fs::read_to_string(&file).unwrap();

    let output = hookshelf(project.path(), xdg.path(), &["add", "use-toggle"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("useToggle is already installed"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
}

/// Test that add fails without tsconfig.json
#[test]
fn add_without_tsconfig_fails() {
    let project = TempDir::new().unwrap();
    let xdg = TempDir::new().unwrap();
    std::fs::write(project.path().join("package.json"), "{}").unwrap();

    let output = hookshelf(project.path(), xdg.path(), &["add", "useToggle"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tsconfig.json"));
    assert!(!project.path().join("src").exists());
}

/// Test that an unknown item exits non-zero
#[test]
fn add_unknown_item_fails() {
    let (project, xdg) = ts_project();
    let output = hookshelf(project.path(), xdg.path(), &["add", "useTeleport"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("useTeleport"));
    assert!(stderr.contains("not found"));
}

/// Test that a directory registry from the command line is used
#[test]
fn add_from_directory_registry() {
    let (project, xdg) = ts_project();
    let registry = TempDir::new().unwrap();
    std::fs::write(
        registry.path().join("registry.json"),
        r#"{ "items": [ { "name": "useCustom", "type": "hook" } ] }"#,
    )
    .unwrap();
    std::fs::create_dir_all(registry.path().join("hooks/useCustom")).unwrap();
    std::fs::write(
        registry.path().join("hooks/useCustom/useCustom.ts"),
        "export function useCustom() {}\n",
    )
    .unwrap();

    let output = hookshelf(
        project.path(),
        xdg.path(),
        &[
            "add",
            "useCustom",
            "--registry",
            registry.path().to_str().unwrap(),
        ],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        std::fs::read_to_string(project.path().join("src/hooks/useCustom/useCustom.ts")).unwrap(),
        "export function useCustom() {}\n"
    );
}

/// Test that list shows bundled items
#[test]
fn list_shows_bundled_items() {
    let (project, xdg) = ts_project();
    let output = hookshelf(project.path(), xdg.path(), &["list", "--kind", "hook"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("useToggle"));
    assert!(stdout.contains("useLocalStorage"));
    assert!(!stdout.contains("isBrowser"));
}

/// Test that info prints dependencies before the item
#[test]
fn info_shows_write_order() {
    let (project, xdg) = ts_project();
    let output = hookshelf(project.path(), xdg.path(), &["info", "useEventListener"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let dep = stdout.find("useIsomorphicLayoutEffect.ts").unwrap();
    let own = stdout.find("useEventListener.ts").unwrap();
    assert!(dep < own);
}

/// Test that init then config show reflects the project file
#[test]
fn init_then_config_show() {
    let (project, xdg) = ts_project();
    assert!(hookshelf(project.path(), xdg.path(), &["init"]).status.success());
    assert!(project.path().join("hookshelf.toml").is_file());

    let output = hookshelf(project.path(), xdg.path(), &["config", "show"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[registry]"));
    assert!(stdout.contains("location = \"bundled\""));
    assert!(stdout.contains("naming = \"camel\""));
}

/// Test that a broken project config is reported, not ignored
#[test]
fn invalid_project_config_fails() {
    let (project, xdg) = ts_project();
    std::fs::write(project.path().join("hookshelf.toml"), "[project\n").unwrap();

    let output = hookshelf(project.path(), xdg.path(), &["add", "useToggle"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}
