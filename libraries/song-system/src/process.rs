//! Blocking subprocess helper shared by the collaborators

use std::path::Path;
use std::process::{Command, Stdio};

/// Run `program` with `args` and return its stdout
///
/// The error string carries the program's stderr so it can be logged as-is.
pub(crate) fn run(program: &Path, args: &[&str]) -> Result<String, String> {
    tracing::debug!("running {} {}", program.display(), args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| format!("failed to run {}: {}", program.display(), e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{} {} failed ({}): {}",
            program.display(),
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
