//! Host paths as seen from inside the plugin sandbox.
//!
//! Zellij mounts the directory the session was started from (normally the
//! user's home) at `/host`, so `~` in user-supplied paths is rewritten there.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Where Cinegrid keeps its trace files: `~/.local/share/zellij/cinegrid`.
///
/// ```
/// use cinegrid::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/cinegrid"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/cinegrid")
}

/// Maps a user-facing path (e.g. the `theme_file` option) into the sandbox.
///
/// Only a leading `~` is rewritten; `~user` forms and everything else pass
/// through untouched.
///
/// ```
/// use cinegrid::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), PathBuf::from("/host/themes/dark.toml"));
/// assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
/// assert_eq!(expand_tilde("/etc/cinegrid.toml"), PathBuf::from("/etc/cinegrid.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_users_home_is_not_expanded() {
        assert_eq!(expand_tilde("~bob/x"), PathBuf::from("~bob/x"));
    }

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(expand_tilde("themes/a.toml"), PathBuf::from("themes/a.toml"));
    }
}
