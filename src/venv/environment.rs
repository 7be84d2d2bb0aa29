use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
pub const PATH: &str = "PATH";

/// The virtualenv's executable directory.
pub fn bin_dir(venv_path: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_path.join("Scripts")
    } else {
        venv_path.join("bin")
    }
}

fn path_separator() -> &'static str {
    if cfg!(windows) {
        ";"
    } else {
        ":"
    }
}

/// Build the child environment for an activated virtualenv.
///
/// Copies the parent environment, removes `unset` names, applies `extra`
/// overrides, sets VIRTUAL_ENV, and prepends the venv's bin directory to
/// PATH. The parent mapping is never mutated.
pub fn make_env(
    parent: &HashMap<String, String>,
    extra: &HashMap<String, String>,
    unset: &[String],
    venv_path: &Path,
) -> HashMap<String, String> {
    let mut env = parent.clone();

    for name in unset {
        env.remove(name);
    }
    for (name, value) in extra {
        env.insert(name.clone(), value.clone());
    }

    env.insert(VIRTUAL_ENV.to_string(), venv_path.display().to_string());

    let bin = bin_dir(venv_path);
    let new_path = match env.get(PATH).filter(|p| !p.is_empty()) {
        Some(existing) => format!("{}{}{}", bin.display(), path_separator(), existing),
        None => bin.display().to_string(),
    };
    env.insert(PATH.to_string(), new_path);

    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environ(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn prepends_bin_dir_to_path() {
        let parent = environ(&[("PATH", "/usr/bin:/bin")]);
        let env = make_env(&parent, &HashMap::new(), &[], Path::new("/envs/proj"));

        #[cfg(unix)]
        assert_eq!(env.get("PATH").unwrap(), "/envs/proj/bin:/usr/bin:/bin");
        // original entries survive
        assert!(env.get("PATH").unwrap().contains("/usr/bin"));
    }

    #[test]
    fn missing_parent_path_yields_bin_dir_only() {
        let parent = HashMap::new();
        let env = make_env(&parent, &HashMap::new(), &[], Path::new("/envs/proj"));

        assert_eq!(env.get("PATH").unwrap(), &bin_dir(Path::new("/envs/proj")).display().to_string());
    }

    #[test]
    fn sets_virtual_env() {
        let parent = HashMap::new();
        let env = make_env(&parent, &HashMap::new(), &[], Path::new("/envs/proj"));

        assert_eq!(env.get(VIRTUAL_ENV).unwrap(), "/envs/proj");
    }

    #[test]
    fn preserves_unrelated_parent_variables() {
        let parent = environ(&[("LANG", "C.UTF-8"), ("TERM", "xterm")]);
        let env = make_env(&parent, &HashMap::new(), &[], Path::new("/envs/proj"));

        assert_eq!(env.get("LANG").unwrap(), "C.UTF-8");
        assert_eq!(env.get("TERM").unwrap(), "xterm");
    }

    #[test]
    fn applies_extra_overrides() {
        let parent = environ(&[("DEBUG", "0")]);
        let extra = environ(&[("DEBUG", "1"), ("EMPTY", "")]);
        let env = make_env(&parent, &extra, &[], Path::new("/envs/proj"));

        assert_eq!(env.get("DEBUG").unwrap(), "1");
        // empty string sets, it does not unset
        assert_eq!(env.get("EMPTY").unwrap(), "");
    }

    #[test]
    fn removes_unset_variables() {
        let parent = environ(&[("PYTHONHOME", "/usr"), ("LANG", "C")]);
        let unset = vec!["PYTHONHOME".to_string()];
        let env = make_env(&parent, &HashMap::new(), &unset, Path::new("/envs/proj"));

        assert!(!env.contains_key("PYTHONHOME"));
        assert_eq!(env.get("LANG").unwrap(), "C");
    }

    #[test]
    fn does_not_mutate_parent() {
        let parent = environ(&[("PATH", "/bin"), ("PYTHONHOME", "/usr")]);
        let unset = vec!["PYTHONHOME".to_string()];
        let _ = make_env(&parent, &HashMap::new(), &unset, Path::new("/envs/proj"));

        assert_eq!(parent.get("PATH").unwrap(), "/bin");
        assert!(parent.contains_key("PYTHONHOME"));
    }
}
