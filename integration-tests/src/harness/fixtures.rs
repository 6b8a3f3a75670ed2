use flowlens_core::cli::read_flows;
use flowlens_core::flow::Flow;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_flows(file: &str) -> Vec<Flow> {
    let path = fixture_path(file);
    read_flows(Some(path.as_path()))
        .unwrap_or_else(|e| panic!("failed to load fixture {file}: {e:#}"))
}
