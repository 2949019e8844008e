//! Source-chain fallback behavior

use std::fs;
use std::path::{Path, PathBuf};

use iconforge::{Canvas, Error, IconSource, Result, Template, ICON_SIZES};

/// A converter whose tool is never installed
struct MissingTool;

impl IconSource for MissingTool {
    fn name(&self) -> &str {
        "missing-tool"
    }

    fn render(&self, _size: u32) -> Result<Canvas> {
        Err(Error::ToolUnavailable("missing-tool is not installed".to_string()))
    }
}

/// A source that fails in a non-recoverable way
struct BrokenSource;

impl IconSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    fn render(&self, _size: u32) -> Result<Canvas> {
        Err(Error::EncodeError("simulated encoder failure".to_string()))
    }
}

#[test]
fn unavailable_tool_falls_through_to_procedural() {
    let sources: Vec<Box<dyn IconSource>> =
        vec![Box::new(MissingTool), Box::new(Template::Robot)];
    let canvas = iconforge::render_with_sources(&sources, 48).expect("fallback failed");
    assert_eq!(canvas, Template::Robot.render(48).unwrap());
}

#[test]
fn fatal_errors_abort_the_chain() {
    let sources: Vec<Box<dyn IconSource>> =
        vec![Box::new(BrokenSource), Box::new(Template::Robot)];
    match iconforge::render_with_sources(&sources, 16) {
        Err(Error::EncodeError(_)) => {}
        other => panic!("expected the broken source to abort, got {:?}", other),
    }
}

#[test]
fn converters_without_a_vector_source_fall_back() {
    // Neither rsvg-convert nor inkscape can run against a missing SVG, so
    // the chain must land on the procedural template.
    let sources = iconforge::default_sources(
        Template::SyncCard,
        Some(Path::new("tests/fixtures/absent.svg")),
    );
    let canvas = iconforge::render_with_sources(&sources, 16).expect("fallback failed");
    assert_eq!(canvas, Template::SyncCard.render(16).unwrap());
}

#[test]
fn batch_generation_survives_unavailable_converters() {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("iconforge-fb-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let sources: Vec<Box<dyn IconSource>> =
        vec![Box::new(MissingTool), Box::new(Template::SyncCard)];
    let results = iconforge::generate_all(&sources, &ICON_SIZES, &dir).expect("create dir");

    for (size, outcome) in results {
        let path = outcome.expect("size failed despite procedural fallback");
        let bytes = fs::read(&path).expect("read back");
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n", "icon{} is not a PNG", size);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn exhausted_chain_surfaces_no_source() {
    let sources: Vec<Box<dyn IconSource>> = vec![Box::new(MissingTool)];
    match iconforge::render_with_sources(&sources, 48) {
        Err(Error::NoSource(48)) => {}
        other => panic!("expected NoSource, got {:?}", other),
    }
}
