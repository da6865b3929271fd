//! Home directory resolution module
//!
//! The base directory defaults to the user's home directory. Which
//! environment variable names it is a per-platform capability, selected in
//! one place instead of branching through the request path.

use std::env;
use std::io;
use std::path::PathBuf;

/// Environment variable naming the home directory on this platform.
///
/// `USERPROFILE` on the Windows family, lowercase `home` on the Plan 9
/// family, `HOME` everywhere else.
pub fn home_env_var() -> &'static str {
    match env::consts::OS {
        "windows" => "USERPROFILE",
        "plan9" => "home",
        _ => "HOME",
    }
}

/// Resolve the user's home directory from the environment.
pub fn base_dir() -> io::Result<PathBuf> {
    let var = home_env_var();
    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("home directory variable {var} is not set"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_env_var_is_platform_specific() {
        let var = home_env_var();
        assert!(matches!(var, "HOME" | "USERPROFILE" | "home"));
    }

    #[test]
    fn test_base_dir_reads_environment() {
        // CI and dev machines always have a home variable set
        let dir = base_dir().expect("home variable should be set");
        assert!(!dir.as_os_str().is_empty());
    }
}
