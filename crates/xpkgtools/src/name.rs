use std::sync::LazyLock;

use regex::Regex;

use crate::utils::{join_path, trim_extension, truncate};

/// Name of the package metadata file.
pub const META_FILE: &str = "crossplane.yaml";

/// Extension of compiled packages, without the leading dot.
pub const XPKG_EXTENSION: &str = "xpkg";

/// Glob matching compiled package file names.
pub const XPKG_MATCH_PATTERN: &str = "*.xpkg";

/// Maximum number of package name characters kept by [`friendly_id`].
pub const MAX_PACKAGE_LEN: usize = 50;

/// Maximum number of hash characters kept by [`friendly_id`].
pub const MAX_HASH_LEN: usize = 12;

pub const DNS_LABEL_MAX_LEN: usize = 63;

static DNS_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("dns label pattern is valid")
});

/// Builds a friendly identifier of at most 63 characters from a package name
/// and its content hash.
///
/// The name keeps its first [`MAX_PACKAGE_LEN`] characters and the hash its
/// first [`MAX_HASH_LEN`], joined by `-`.
pub fn friendly_id(package: &str, hash: &str) -> String {
    friendly_id_with_limits(package, hash, MAX_PACKAGE_LEN, MAX_HASH_LEN)
}

pub(crate) fn friendly_id_with_limits(
    package: &str,
    hash: &str,
    max_package_len: usize,
    max_hash_len: usize,
) -> String {
    format!(
        "{}-{}",
        truncate(package, max_package_len),
        truncate(hash, max_hash_len)
    )
}

/// Builds the output path of a package, replacing any extension with `.xpkg`.
///
/// With an empty `name` the extension of `directory` itself is replaced.
pub fn build_path(directory: &str, name: &str) -> String {
    build_path_with_extension(directory, name, XPKG_EXTENSION)
}

pub(crate) fn build_path_with_extension(directory: &str, name: &str, extension: &str) -> String {
    // "out.tar/" names the same directory as "out.tar"; "/" stays the root
    let directory = match directory.trim_end_matches('/') {
        "" => directory,
        trimmed => trimmed,
    };
    let full = join_path(directory, name);
    format!("{}.{}", trim_extension(&full), extension)
}

/// Converts an arbitrary reference into a DNS label.
///
/// Only the first 63 bytes are considered. Lowercase letters and digits are
/// kept, `.`, `/`, `:` and `-` become `-`, anything else is dropped.
pub fn to_dns_label(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut label = String::with_capacity(DNS_LABEL_MAX_LEN.min(bytes.len()));

    for (i, &b) in bytes.iter().enumerate() {
        let at_edge = i == 0 || i == DNS_LABEL_MAX_LEN - 1 || i == bytes.len() - 1;
        match b {
            b'a'..=b'z' | b'0'..=b'9' => label.push(b as char),
            b'.' | b'/' | b':' | b'-' if !at_edge => label.push('-'),
            _ => {}
        }

        if i == DNS_LABEL_MAX_LEN - 1 {
            break;
        }
    }

    label.trim_matches('-').to_string()
}

/// Whether `s` is a valid RFC 1123 DNS label.
pub fn is_dns_label(s: &str) -> bool {
    s.len() <= DNS_LABEL_MAX_LEN && DNS_LABEL_PATTERN.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_PACKAGE: &str = "provider-aws-plusabunchofothernonsensethatisgoingtogetslicedoff";

    struct Case {
        name: &'static str,
        reason: &'static str,
        args: (&'static str, &'static str),
        want: &'static str,
    }

    #[test]
    fn test_friendly_id() {
        let cases = [
            Case {
                name: "BothUnderLimit",
                reason: "If both package and hash are under limit neither should be truncated.",
                args: ("provider-aws", "1234567"),
                want: "provider-aws-1234567",
            },
            Case {
                name: "PackageOverLimit",
                reason: "If package is over limit it should be truncated.",
                args: (LONG_PACKAGE, "1234567"),
                want: "provider-aws-plusabunchofothernonsensethatisgoingt-1234567",
            },
            Case {
                name: "HashOverLimit",
                reason: "If hash is over limit it should be truncated.",
                args: ("provider-aws", "1234567891234567"),
                want: "provider-aws-123456789123",
            },
            Case {
                name: "BothOverLimit",
                reason: "If both package and hash are over limit both should be truncated.",
                args: (LONG_PACKAGE, "1234567891234567"),
                want: "provider-aws-plusabunchofothernonsensethatisgoingt-123456789123",
            },
        ];

        for case in cases {
            let (package, hash) = case.args;
            assert_eq!(
                friendly_id(package, hash),
                case.want,
                "{}: {}",
                case.name,
                case.reason
            );
        }
    }

    #[test]
    fn test_friendly_id_bounded() {
        let id = friendly_id(&"p".repeat(200), &"h".repeat(200));
        assert_eq!(id.chars().count(), MAX_PACKAGE_LEN + 1 + MAX_HASH_LEN);
        assert!(is_dns_label(&id));
    }

    #[test]
    fn test_friendly_id_segments_are_prefixes() {
        let id = friendly_id(LONG_PACKAGE, "abcdef0123456789abcdef");
        let (package, hash) = id.rsplit_once('-').unwrap();
        assert!(LONG_PACKAGE.starts_with(package));
        assert!("abcdef0123456789abcdef".starts_with(hash));
    }

    #[test]
    fn test_friendly_id_empty_inputs() {
        assert_eq!(friendly_id("", "abc"), "-abc");
        assert_eq!(friendly_id("pkg", ""), "pkg-");
        assert_eq!(friendly_id("", ""), "-");
    }

    #[test]
    fn test_build_path() {
        let cases = [
            Case {
                name: "NoExtension",
                reason: "We should append extension if it does not exist.",
                args: ("path/to/somewhere", "test"),
                want: "path/to/somewhere/test.xpkg",
            },
            Case {
                name: "ReplaceExtensionName",
                reason: "We should replace an extension if one exists in name.",
                args: ("path/to/somewhere", "test.tar"),
                want: "path/to/somewhere/test.xpkg",
            },
            Case {
                name: "ReplaceExtensionPath",
                reason: "We should replace an extension if one exists in path.",
                args: ("path/to/somewhere.tar", ""),
                want: "path/to/somewhere.xpkg",
            },
            Case {
                name: "OnlyLastExtension",
                reason: "Only the final extension should be replaced.",
                args: ("out", "test.tar.gz"),
                want: "out/test.tar.xpkg",
            },
            Case {
                name: "DottedDirectory",
                reason: "Dots in the directory should survive when a name is given.",
                args: ("out.d", "test"),
                want: "out.d/test.xpkg",
            },
            Case {
                name: "AlreadyPackage",
                reason: "An existing xpkg extension should not be doubled.",
                args: ("out", "test.xpkg"),
                want: "out/test.xpkg",
            },
            Case {
                name: "NoSeparatorInDirectory",
                reason: "A bare directory name is joined like any other.",
                args: ("out", ""),
                want: "out.xpkg",
            },
            Case {
                name: "TrailingSeparator",
                reason: "A trailing separator should not hide the directory name.",
                args: ("out/", ""),
                want: "out.xpkg",
            },
            Case {
                name: "TrailingSeparatorWithExtension",
                reason: "We should replace an extension in a path ending with a separator.",
                args: ("out.tar/", ""),
                want: "out.xpkg",
            },
            Case {
                name: "TrailingSeparatorWithName",
                reason: "Joining should not double a trailing separator.",
                args: ("out.d//", "test"),
                want: "out.d/test.xpkg",
            },
            Case {
                name: "RootDirectory",
                reason: "The root directory has no name to strip.",
                args: ("/", ""),
                want: "/.xpkg",
            },
            Case {
                name: "BothEmpty",
                reason: "Empty inputs still produce a well-formed extension.",
                args: ("", ""),
                want: ".xpkg",
            },
        ];

        for case in cases {
            let (directory, name) = case.args;
            let full = build_path(directory, name);
            assert_eq!(full, case.want, "{}: {}", case.name, case.reason);
            assert_eq!(full.matches(".xpkg").count(), 1, "{}", case.name);
        }
    }

    #[test]
    fn test_to_dns_label() {
        assert_eq!(
            to_dns_label("crossplane/provider-aws:v0.1.0"),
            "crossplane-provider-aws-v0-1-0"
        );
        assert_eq!(to_dns_label("-leading.and.trailing-"), "leading-and-trailing");
        assert_eq!(to_dns_label("Registry.io/Org"), "egistry-io-rg");
        assert_eq!(to_dns_label("under_score"), "underscore");
        assert_eq!(to_dns_label(""), "");
    }

    #[test]
    fn test_to_dns_label_bounded() {
        let label = to_dns_label(&format!("{}/{}", "a".repeat(40), "b".repeat(40)));
        assert!(label.len() <= DNS_LABEL_MAX_LEN);
        assert!(is_dns_label(&label));
        assert!(label.starts_with(&"a".repeat(40)));
    }

    #[test]
    fn test_is_dns_label() {
        assert!(is_dns_label("provider-aws"));
        assert!(is_dns_label("a"));
        assert!(!is_dns_label(""));
        assert!(!is_dns_label("-provider"));
        assert!(!is_dns_label("provider-"));
        assert!(!is_dns_label("Provider"));
        assert!(!is_dns_label(&"a".repeat(64)));
    }
}
