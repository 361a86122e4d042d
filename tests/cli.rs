//! Integration tests driving the compiled binary against temporary project
//! trees.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run_in(root: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devteam"))
        .args(args)
        .current_dir(root)
        .output()
        .expect("binary should run")
}

/// A throwaway project tree under the system temp directory.
struct TempProject {
    root: PathBuf,
}

impl TempProject {
    fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("devteam-test-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("temp project root");
        Self { root }
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent directories");
        }
        fs::write(path, contents).expect("write fixture");
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join(relative)).expect("read output")
    }
}

impl Drop for TempProject {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

const USER_MODEL: &str = r#"<?php

namespace App\Models;

/**
 * Represents a user.
 */
class User extends Model
{
    protected $table = 'users';

    protected $fillable = ['name'];

    public function posts()
    {
        return $this->hasMany(Post::class);
    }
}
"#;

#[test]
fn backend_summary_scans_a_real_tree() {
    let project = TempProject::new("backend");
    project.write("composer.json", r#"{"require": {"laravel/framework": "^11.0"}}"#);
    project.write("app/Models/User.php", USER_MODEL);
    project.write(
        "routes/web.php",
        "<?php\nRoute::get('/users', [UserController::class, 'index']);\n",
    );

    let output = run_in(&project.root, &["backend-summary"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value =
        serde_json::from_str(&project.read("devteam/contexts/backend-summary.json")).unwrap();
    assert_eq!(doc["packages"]["require"]["laravel/framework"], "^11.0");
    let model = &doc["components"]["models"][0];
    assert_eq!(model["class"], "App.Models.User");
    assert_eq!(model["table"], "users");
    assert_eq!(model["relationships"][0], "posts");
    assert_eq!(doc["routes"]["web"][0]["method"], "GET");
}

#[test]
fn backend_summary_honors_output_flag() {
    let project = TempProject::new("backend-output");
    let output = run_in(&project.root, &["backend-summary", "--output", "custom.json"]);
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_str(&project.read("custom.json")).unwrap();
    assert_eq!(doc["components"]["models"], serde_json::json!([]));
}

#[test]
fn backend_summary_is_idempotent() {
    let project = TempProject::new("idempotent");
    project.write("app/Models/User.php", USER_MODEL);

    let first = run_in(&project.root, &["backend-summary", "--output", "a.json"]);
    let second = run_in(&project.root, &["backend-summary", "--output", "b.json"]);
    assert!(first.status.success() && second.status.success());
    assert_eq!(project.read("a.json"), project.read("b.json"));
}

#[test]
fn frontend_summary_scans_components_and_assets() {
    let project = TempProject::new("frontend");
    project.write("package.json", r#"{"dependencies": {"vue": "^3.4.0"}}"#);
    project.write(
        "resources/js/components/Badge.vue",
        "<template><span /></template>\n<script setup>\nconst props = defineProps(['label'])\n</script>\n",
    );
    project.write("resources/css/app.css", "body {}\n");

    let output = run_in(&project.root, &["frontend-summary"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let doc: serde_json::Value =
        serde_json::from_str(&project.read("devteam/contexts/frontend-summary.json")).unwrap();
    assert_eq!(doc["vueVersion"], "^3.4.0");
    assert_eq!(doc["components"][0]["name"], "Badge");
    assert_eq!(doc["components"][0]["props"][0], "label");
    assert_eq!(doc["cssAssets"][0]["type"], "css");
}

#[test]
fn ignored_directories_are_excluded_from_output() {
    let project = TempProject::new("ignored");
    project.write("devteam.yaml", "summary:\n  ignored_directories: [app/Models/Legacy]\n");
    project.write("app/Models/Current.php", "<?php\nnamespace App\\Models;\nclass Current {}\n");
    project.write("app/Models/Legacy/Old.php", "<?php\nnamespace App\\Models;\nclass Old {}\n");

    let output = run_in(&project.root, &["backend-summary"]);
    assert!(output.status.success());

    let text = project.read("devteam/contexts/backend-summary.json");
    assert!(text.contains("Current"));
    assert!(!text.contains("Legacy/Old.php"));
    assert!(!text.contains("App.Models.Old"));
}

#[test]
fn help_lists_subcommands() {
    let project = TempProject::new("help");
    let output = run_in(&project.root, &["--help"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("feature"));
    assert!(text.contains("backend-summary"));
    assert!(text.contains("frontend-summary"));
}

#[test]
fn unknown_subcommand_fails() {
    let project = TempProject::new("unknown");
    let output = run_in(&project.root, &["bogus"]);
    assert!(!output.status.success());
}
