//! Flag naming conventions.

use heck::ToKebabCase;

/// Prefix prepended to every synthesised option name.
pub const OPTION_PREFIX: &str = "--";

/// Separator placed between description fragments.
pub const DESCRIPTION_JOINER: &str = "\n";

/// Converts a property identifier to its canonical flag name.
///
/// # Examples
///
/// ```rust
/// use cmd_starter::option_name;
///
/// assert_eq!(option_name("MaxRetryCount"), "--max-retry-count");
/// assert_eq!(option_name("dry_run"), "--dry-run");
/// ```
#[must_use]
pub fn option_name(property: &str) -> String {
    format!("{OPTION_PREFIX}{}", property.to_kebab_case())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::option_name;

    #[rstest]
    #[case("Name", "--name")]
    #[case("Retries", "--retries")]
    #[case("OutputPath", "--output-path")]
    #[case("HTTPProxy", "--http-proxy")]
    #[case("Level2Cache", "--level2-cache")]
    fn pascal_case_becomes_kebab_case(#[case] property: &str, #[case] expected: &str) {
        assert_eq!(option_name(property), expected);
    }
}
