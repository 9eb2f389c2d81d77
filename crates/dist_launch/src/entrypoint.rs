//! Entrypoint resolution - a pure string transformation.

const SCRIPT_SUFFIX: &str = ".py";
const TOOLS_DIR: &str = "tools";

/// Resolve the training entrypoint from a file identifier.
///
/// A `.py`-suffixed identifier is used as-is, relative to the invocation
/// directory; a bare name is looked up under `tools/` with the suffix
/// appended. No filesystem check happens here: a missing file surfaces
/// later as the external launcher's own "script not found" diagnostic.
pub fn resolve(file: &str) -> String {
    if file.ends_with(SCRIPT_SUFFIX) {
        file.to_string()
    } else {
        format!("{}/{}{}", TOOLS_DIR, file, SCRIPT_SUFFIX)
    }
}
