use crate::core::error::{Result, VenvRunError};
use crate::core::path::absolutize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A virtualenv directory located on disk, with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVenv {
    pub path: PathBuf,
    pub name: String,
}

/// Locate the virtualenv directory from an explicit path or a name.
///
/// Without `--path`, the name comes from `--name` or is consumed from the
/// front of `rest`, then joined onto the base directory. The result is
/// absolute (relative paths join onto `cwd`), and the name falls back to
/// the final path segment.
pub fn resolve(
    explicit_path: Option<&Path>,
    name: Option<&str>,
    rest: &mut Vec<String>,
    base_dir: Option<&Path>,
    cwd: &Path,
) -> Result<ResolvedVenv> {
    let mut name = name.map(str::to_string);

    let candidate = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => {
            let base = base_dir.ok_or_else(|| {
                VenvRunError::Config(
                    "could not figure out a virtualenvs directory. \
                     make sure $HOME is set, or $WORKON_HOME, \
                     or set virtualenvs in the config file"
                        .to_string(),
                )
            })?;
            if !base.exists() {
                return Err(VenvRunError::BaseNotFound(base.to_path_buf()));
            }

            let venv_name = match name.take() {
                Some(n) => n,
                None if rest.is_empty() => {
                    return Err(VenvRunError::Config(
                        "could not find a virtualenv name in the command line".to_string(),
                    ))
                }
                None => rest.remove(0),
            };
            let candidate = base.join(&venv_name);
            name = Some(venv_name);
            candidate
        }
    };

    let path = absolutize(cwd, &candidate);

    let name = match name {
        Some(name) => name,
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                VenvRunError::Config(format!(
                    "could not derive a virtualenv name from {:?}",
                    path
                ))
            })?,
    };

    if !path.exists() {
        return Err(VenvRunError::VenvNotFound(path));
    }

    debug!(name = %name, path = %path.display(), "resolved virtualenv");
    Ok(ResolvedVenv { path, name })
}
