use crate::core::path::expand_home;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory name joined onto $HOME when neither the config file nor
/// $WORKON_HOME names a virtualenvs directory.
pub const DEFAULT_VIRTUALENVS_DIR: &str = ".virtualenvs";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Base directory containing the named virtualenvs. `~/` expands
    /// against the home directory.
    #[serde(default)]
    pub virtualenvs: Option<String>,

    /// Extra variables set (or overridden) in the child environment.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Variables removed from the child environment. Distinct from an
    /// empty-string entry in `env`, which sets the variable to "".
    #[serde(default)]
    pub unset: Vec<String>,
}

impl Config {
    /// The virtualenvs base directory, if one can be determined.
    ///
    /// Order: the `virtualenvs` setting, then $WORKON_HOME, then
    /// $HOME/.virtualenvs. Empty variables count as unset.
    pub fn virtualenv_base(&self, environ: &HashMap<String, String>) -> Option<PathBuf> {
        let home = environ
            .get("HOME")
            .filter(|v| !v.is_empty())
            .map(Path::new);

        if let Some(configured) = self.virtualenvs.as_deref().filter(|v| !v.is_empty()) {
            return Some(expand_home(configured, home));
        }

        if let Some(workon) = environ.get("WORKON_HOME").filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(workon));
        }

        home.map(|h| h.join(DEFAULT_VIRTUALENVS_DIR))
    }
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
    fn configured_base_wins() {
        let config = Config {
            virtualenvs: Some("/opt/envs".to_string()),
            ..Config::default()
        };
        let env = environ(&[("HOME", "/home/me"), ("WORKON_HOME", "/work/envs")]);

        assert_eq!(config.virtualenv_base(&env), Some(PathBuf::from("/opt/envs")));
    }

    #[test]
    fn configured_base_expands_tilde() {
        let config = Config {
            virtualenvs: Some("~/envs".to_string()),
            ..Config::default()
        };
        let env = environ(&[("HOME", "/home/me")]);

        assert_eq!(config.virtualenv_base(&env), Some(PathBuf::from("/home/me/envs")));
    }

    #[test]
    fn workon_home_beats_home_fallback() {
        let config = Config::default();
        let env = environ(&[("HOME", "/home/me"), ("WORKON_HOME", "/work/envs")]);

        assert_eq!(config.virtualenv_base(&env), Some(PathBuf::from("/work/envs")));
    }

    #[test]
    fn home_fallback_appends_virtualenvs_dir() {
        let config = Config::default();
        let env = environ(&[("HOME", "/home/me")]);

        assert_eq!(
            config.virtualenv_base(&env),
            Some(PathBuf::from("/home/me/.virtualenvs"))
        );
    }

    #[test]
    fn no_base_when_nothing_is_set() {
        let config = Config::default();
        let env = environ(&[("WORKON_HOME", ""), ("HOME", "")]);

        assert_eq!(config.virtualenv_base(&env), None);
    }
}
