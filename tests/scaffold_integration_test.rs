use proj::{ProjError, ProjectCreator, ScaffoldEngine, Step, Toolchain};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Stands in for `go mod init` / `go mod tidy`.
#[derive(Default)]
struct FakeToolchain {
    fail_init: bool,
    fail_tidy: bool,
    init_calls: Cell<usize>,
    tidy_calls: Cell<usize>,
}

impl Toolchain for FakeToolchain {
    fn init_module(&self, dir: &Path, module_path: Option<&str>) -> proj::Result<()> {
        self.init_calls.set(self.init_calls.get() + 1);
        if self.fail_init {
            return Err(ProjError::Toolchain {
                step: Step::ModuleInit,
                command: "go mod init".to_string(),
                status: failed_status(),
                output: "go: cannot determine module path for source directory".to_string(),
            });
        }
        let module = module_path.unwrap_or("example.com/default");
        fs::write(dir.join("go.mod"), format!("module {}\n\ngo 1.22\n", module)).unwrap();
        Ok(())
    }

    fn tidy(&self, dir: &Path) -> proj::Result<()> {
        self.tidy_calls.set(self.tidy_calls.get() + 1);
        if self.fail_tidy {
            return Err(ProjError::Toolchain {
                step: Step::ModuleTidy,
                command: "go mod tidy".to_string(),
                status: failed_status(),
                output: "go: github.com/spf13/cobra: no network".to_string(),
            });
        }
        fs::write(dir.join("go.sum"), "").unwrap();
        Ok(())
    }
}

#[cfg(unix)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(1)
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_fresh_name_is_fully_scaffolded() {
    let root = TempDir::new().unwrap();
    let toolchain = FakeToolchain::default();
    let creator = ProjectCreator::new(&toolchain, root.path());

    let project = creator.create("billing").unwrap();

    assert!(project.is_dir());
    assert!(project.join("cmd").is_dir());
    assert!(project.join("main.go").is_file());
    assert!(project.join("cmd").join("cmd.go").is_file());
    assert!(project.join("go.mod").is_file());
    assert!(project.join("go.sum").is_file());
    assert_eq!(toolchain.init_calls.get(), 1);
    assert_eq!(toolchain.tidy_calls.get(), 1);
}

#[test]
fn test_rendered_sources_substitute_both_fields() {
    let root = TempDir::new().unwrap();
    let creator = ProjectCreator::new(FakeToolchain::default(), root.path());
    let wd = creator.working_dir_base();

    let project = creator.create("billing").unwrap();

    let main_go = fs::read_to_string(project.join("main.go")).unwrap();
    let cmd_go = fs::read_to_string(project.join("cmd").join("cmd.go")).unwrap();

    assert!(main_go.contains(&format!("\"{}/billing/cmd\"", wd)));
    assert!(cmd_go.contains("billing"));
    assert!(cmd_go.contains(&wd));
    for source in [&main_go, &cmd_go] {
        assert!(!source.contains("{{"));
        assert!(!source.contains("}}"));
        assert!(!source.contains("{%"));
    }
}

#[test]
fn test_existing_directory_is_left_untouched() {
    let root = TempDir::new().unwrap();
    let existing = root.path().join("billing");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("notes.txt"), "mine").unwrap();
    let toolchain = FakeToolchain::default();
    let creator = ProjectCreator::new(&toolchain, root.path());

    let err = creator.create("billing").unwrap_err();

    assert!(matches!(err, ProjError::AlreadyExists { .. }));
    assert_eq!(entries(&existing), vec!["notes.txt"]);
    assert_eq!(toolchain.init_calls.get(), 0);
}

#[test]
fn test_collision_does_not_stop_later_names() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("taken"), "").unwrap();
    let engine = ScaffoldEngine::new(ProjectCreator::new(FakeToolchain::default(), root.path()));

    let report = engine.run(["taken", "fresh"]);

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].name, "taken");
    assert!(matches!(
        report.outcomes[0].result,
        Err(ProjError::AlreadyExists { .. })
    ));
    assert_eq!(report.outcomes[1].name, "fresh");
    assert!(report.outcomes[1].result.is_ok());
    assert!(root.path().join("fresh").join("cmd").join("cmd.go").is_file());
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
}

#[test]
fn test_module_init_failure_leaves_directories_without_sources() {
    let root = TempDir::new().unwrap();
    let toolchain = FakeToolchain {
        fail_init: true,
        ..FakeToolchain::default()
    };
    let creator = ProjectCreator::new(&toolchain, root.path());

    let err = creator.create("billing").unwrap_err();

    let project = root.path().join("billing");
    assert!(project.is_dir());
    assert!(project.join("cmd").is_dir());
    assert_eq!(entries(&project), vec!["cmd"]);
    assert!(entries(&project.join("cmd")).is_empty());
    assert_eq!(toolchain.tidy_calls.get(), 0);

    assert_eq!(err.step(), Step::ModuleInit);
    assert!(err.to_string().contains("cannot determine module path"));
}

#[test]
fn test_tidy_failure_keeps_rendered_sources() {
    let root = TempDir::new().unwrap();
    let toolchain = FakeToolchain {
        fail_tidy: true,
        ..FakeToolchain::default()
    };
    let creator = ProjectCreator::new(&toolchain, root.path());

    let err = creator.create("billing").unwrap_err();

    let project = root.path().join("billing");
    assert_eq!(err.step(), Step::ModuleTidy);
    assert!(project.join("main.go").is_file());
    assert!(project.join("cmd").join("cmd.go").is_file());
    assert!(project.join("go.mod").is_file());
    assert!(!project.join("go.sum").exists());
}

#[test]
fn test_second_run_on_same_name_fails_without_mutation() {
    let root = TempDir::new().unwrap();
    let toolchain = FakeToolchain::default();
    let creator = ProjectCreator::new(&toolchain, root.path());

    creator.create("billing").unwrap();
    let project = root.path().join("billing");
    let main_go_before = fs::read_to_string(project.join("main.go")).unwrap();
    let entries_before = entries(&project);

    let err = creator.create("billing").unwrap_err();

    assert!(matches!(err, ProjError::AlreadyExists { .. }));
    assert_eq!(entries(&project), entries_before);
    assert_eq!(fs::read_to_string(project.join("main.go")).unwrap(), main_go_before);
    assert_eq!(toolchain.init_calls.get(), 1);
    assert_eq!(toolchain.tidy_calls.get(), 1);
}

#[test]
fn test_failed_project_blocks_rerun() {
    let root = TempDir::new().unwrap();
    let failing = FakeToolchain {
        fail_init: true,
        ..FakeToolchain::default()
    };
    ProjectCreator::new(&failing, root.path())
        .create("billing")
        .unwrap_err();

    let working = FakeToolchain::default();
    let err = ProjectCreator::new(&working, root.path())
        .create("billing")
        .unwrap_err();

    assert!(matches!(err, ProjError::AlreadyExists { .. }));
    assert_eq!(working.init_calls.get(), 0);
}

#[test]
fn test_explicit_module_path_reaches_manifest() {
    let root = TempDir::new().unwrap();
    let creator =
        ProjectCreator::new(FakeToolchain::default(), root.path()).with_explicit_module_path(true);
    let wd = creator.working_dir_base();

    let project = creator.create("billing").unwrap();

    let go_mod = fs::read_to_string(project.join("go.mod")).unwrap();
    assert!(go_mod.starts_with(&format!("module {}/billing", wd)));
}
