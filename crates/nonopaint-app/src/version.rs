//! Build metadata reported at startup.

/// Returns `pkg_version (short_hash)`, with a `-dirty` suffix for builds from
/// a modified tree. Without git metadata the hash reads `unknown`.
#[must_use]
pub fn build_version() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_GIT_DIRTY"),
    )
}

fn format_version(pkg_version: &str, git_sha: Option<&str>, git_dirty: Option<&str>) -> String {
    let git_sha = git_sha.unwrap_or("unknown");
    let suffix = if git_dirty == Some("true") { "-dirty" } else { "" };
    format!("{pkg_version} ({git_sha}{suffix})")
}

#[cfg(test)]
mod tests {
    use super::format_version;

    #[test]
    fn formats_hash_and_dirty_flag() {
        assert_eq!(
            format_version("0.1.0", Some("abc1234"), Some("false")),
            "0.1.0 (abc1234)"
        );
        assert_eq!(
            format_version("0.1.0", Some("abc1234"), Some("true")),
            "0.1.0 (abc1234-dirty)"
        );
        assert_eq!(format_version("0.1.0", None, None), "0.1.0 (unknown)");
    }
}
