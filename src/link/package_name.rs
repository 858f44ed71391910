//! Package argument normalization.

/// Strips a trailing `@version` or `@tag` from a package argument.
///
/// The suffix starts at the first `@` after the first character and must be
/// non-empty, so scoped names like `@scope/pkg` keep their leading `@`.
#[must_use]
pub fn normalize_package_name(raw: &str) -> &str {
    raw.char_indices()
        .skip(1)
        .find(|&(index, c)| c == '@' && index + 1 < raw.len())
        .map_or(raw, |(index, _)| &raw[..index])
}

#[cfg(test)]
mod tests {
    use super::normalize_package_name;

    #[test]
    fn strips_version_and_tag() {
        assert_eq!(normalize_package_name("react-native-maps@0.22.1"), "react-native-maps");
        assert_eq!(normalize_package_name("lib@latest"), "lib");
        assert_eq!(normalize_package_name("lib@next@1"), "lib");
    }

    #[test]
    fn plain_names_are_unchanged() {
        assert_eq!(normalize_package_name("react-native-maps"), "react-native-maps");
        assert_eq!(normalize_package_name(""), "");
    }

    #[test]
    fn scoped_names_keep_their_scope() {
        assert_eq!(normalize_package_name("@scope/lib"), "@scope/lib");
        assert_eq!(normalize_package_name("@scope/lib@2.0.0"), "@scope/lib");
    }

    #[test]
    fn dangling_at_is_kept() {
        assert_eq!(normalize_package_name("lib@"), "lib@");
    }
}
