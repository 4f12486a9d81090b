use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every file the CLI writes.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

/// Provenance block: git revision, library version, run tag, params and outputs.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "rectcast_git_rev": current_git_rev(),
        "rectcast_version": rectcast::VERSION,
        "rectcast_tag": payload.tag,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write `<artifact>.provenance.json`; adds the callsite to the block from `document`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `<dir>/<stem>.provenance.json` for `<dir>/<stem>.<ext>`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .unwrap_or_else(|| OsStr::new("artifact"))
        .to_string_lossy();
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision of the checkout: `RECTCAST_GIT_REV` (build time, then run time),
/// else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    option_env!("RECTCAST_GIT_REV")
        .map(str::to_owned)
        .into_iter()
        .chain(std::env::var("RECTCAST_GIT_REV").ok())
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/queries.csv");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/queries.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hits.csv");
        fs::write(&artifact, "t_entry,t_exit,hit\n").unwrap();
        let payload = Payload::new(json!({"count": 3}), Some("smoke".to_string()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["rectcast_tag"], "smoke");
        assert!(parsed["rectcast_git_rev"].is_string());
        assert_eq!(parsed["params"]["count"], 3);
        assert_eq!(parsed["rectcast_version"], rectcast::VERSION);
        assert!(parsed["callsite"]["line"].is_u64());
    }
}
