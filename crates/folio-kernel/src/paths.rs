//! Path resolution for shell arguments.
//!
//! Pure string manipulation; nothing here touches the VFS. Callers check
//! existence and type after normalizing.
//!
//! | target        | result                          |
//! |---------------|---------------------------------|
//! | (none), `/`   | `/`                             |
//! | `..`          | `cwd` minus its last segment    |
//! | `/abs/path`   | `/abs/path`, unchanged          |
//! | `rel`         | `cwd/rel`                       |
//!
//! Absolute targets are taken verbatim: embedded `..`, `.` or doubled slashes
//! are not collapsed.

/// The root path.
pub const ROOT: &str = "/";

/// Resolve `target` against `cwd` into an absolute path.
///
/// `cwd` must already be absolute.
pub fn normalize(cwd: &str, target: Option<&str>) -> String {
    match target {
        None | Some(ROOT) => ROOT.to_string(),
        Some("..") => parent(cwd),
        Some(abs) if abs.starts_with('/') => abs.to_string(),
        Some(rel) => join(cwd, rel),
    }
}

/// `path` with its last segment removed. The parent of `/` is `/`.
pub fn parent(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

/// Join a relative name onto a directory path.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
