use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use iconforge::Template;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn check_golden(template: Template, size: u32, name: &str) {
    let canvas = template.render(size).expect("render failed");
    let digest = hex::encode(Sha256::digest(canvas.pixels()));

    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}

#[test]
fn golden_robot_128() {
    check_golden(Template::Robot, 128, "robot_128.sha256");
}

#[test]
fn golden_robot_16() {
    check_golden(Template::Robot, 16, "robot_16.sha256");
}

#[test]
fn golden_sync_card_128() {
    check_golden(Template::SyncCard, 128, "sync_card_128.sha256");
}
