//! The substitution rule: a literal marker and the token that replaces it.
//!
//! # Design
//!
//! `Substitution` is a value type validated at construction. Once built it
//! cannot fail: applying it is a plain left-to-right, non-overlapping literal
//! replacement over the template text. Every marker becomes the replacement,
//! which turns each `#cmakedefine` branch into an unconditional `#define`.
//! There is no feature detection; all guarded definitions are enabled.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    template::{Rendered, TemplateText},
};

/// Conditional-compilation prefix found in CMake-style header templates.
pub const DEFAULT_MARKER: &str = "#cmakedefine";

/// Unconditional definition prefix written in its place.
pub const DEFAULT_REPLACEMENT: &str = "#define";

/// A validated `(marker, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Substitution {
    marker: String,
    replacement: String,
}

impl Substitution {
    /// Build a rule, rejecting markers that are empty or that the replacement
    /// could reintroduce.
    ///
    /// A rewritten template must contain no marker, so a second pass is a
    /// no-op. Any marker left after one pass overlaps an inserted replacement
    /// (or spans the seam of a deletion), so the rule is refused when:
    ///
    /// - the replacement contains the marker;
    /// - the marker contains the replacement (this includes an empty one);
    /// - a proper suffix of the replacement starts the marker;
    /// - a proper prefix of the replacement ends the marker.
    pub fn new(
        marker: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let marker = marker.into();
        let replacement = replacement.into();

        if marker.is_empty() {
            return Err(DomainError::EmptyMarker);
        }
        if replacement.contains(&marker) {
            return Err(DomainError::ReplacementContainsMarker {
                marker,
                replacement,
            });
        }
        if marker.contains(&replacement) || overlaps(&marker, &replacement) {
            return Err(DomainError::ReplacementFormsMarker {
                marker,
                replacement,
            });
        }

        Ok(Self {
            marker,
            replacement,
        })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Number of non-overlapping marker occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        text.matches(self.marker.as_str()).count()
    }

    /// 1-based numbers of the lines that contain at least one marker.
    pub fn marker_lines(&self, text: &str) -> Vec<usize> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| line.contains(self.marker.as_str()))
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Replace every marker occurrence in the template.
    pub fn apply(&self, template: &TemplateText) -> Rendered {
        let source = template.as_str();
        let replacements = self.count(source);
        let text = if replacements == 0 {
            source.to_owned()
        } else {
            source.replace(self.marker.as_str(), &self.replacement)
        };
        Rendered::new(text, replacements)
    }
}

/// `true` if `replacement` can complete a marker started or finished by the
/// text next to it.
fn overlaps(marker: &str, replacement: &str) -> bool {
    replacement.char_indices().skip(1).any(|(i, _)| {
        marker.starts_with(&replacement[i..]) || marker.ends_with(&replacement[..i])
    })
}

impl Default for Substitution {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
            replacement: DEFAULT_REPLACEMENT.to_owned(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.marker, self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_default(input: &str) -> Rendered {
        Substitution::default().apply(&TemplateText::new(input))
    }

    #[test]
    fn default_rule_is_cmakedefine_to_define() {
        let rule = Substitution::default();
        assert_eq!(rule.marker(), "#cmakedefine");
        assert_eq!(rule.replacement(), "#define");
        assert_eq!(rule.to_string(), "'#cmakedefine' -> '#define'");
    }

    #[test]
    fn single_marker_is_replaced() {
        let out = apply_default("#cmakedefine FOO_ENABLED\nint x;\n");
        assert_eq!(out.as_str(), "#define FOO_ENABLED\nint x;\n");
        assert_eq!(out.replacements(), 1);
    }

    #[test]
    fn markers_on_separate_lines_are_replaced_independently() {
        let input = "/* header */\n#cmakedefine A\nint a;\n#cmakedefine B 1\n";
        let out = apply_default(input);

        assert_eq!(
            out.as_str(),
            "/* header */\n#define A\nint a;\n#define B 1\n"
        );
        assert_eq!(out.replacements(), 2);
        assert_eq!(out.as_str().lines().count(), input.lines().count());
    }

    #[test]
    fn n_markers_become_n_replacements() {
        let input = "#cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX2\n\
                     #cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX512BW\n\
                     #cmakedefine INTGEMM_COMPILER_SUPPORTS_AVX512VNNI\n";
        let out = apply_default(input);

        assert_eq!(out.replacements(), 3);
        assert_eq!(out.as_str().matches("#define").count(), 3);
        assert_eq!(out.as_str().matches("#cmakedefine").count(), 0);
    }

    #[test]
    fn text_without_markers_is_unchanged() {
        let input = "#ifndef GUARD\n#define GUARD\n#endif\n";
        let out = apply_default(input);
        assert_eq!(out.as_str(), input);
        assert_eq!(out.replacements(), 0);
    }

    #[test]
    fn empty_template_stays_empty() {
        let out = apply_default("");
        assert!(out.as_str().is_empty());
        assert_eq!(out.replacements(), 0);
    }

    #[test]
    fn applying_twice_is_a_no_op() {
        let rule = Substitution::default();
        let once = rule.apply(&TemplateText::new("#cmakedefine X\n#cmakedefine Y\n"));
        let twice = rule.apply(&TemplateText::new(once.as_str()));

        assert_eq!(once.as_str(), twice.as_str());
        assert_eq!(twice.replacements(), 0);
    }

    #[test]
    fn marker_inside_a_line_is_replaced() {
        let out = apply_default("  #cmakedefine   SPACED  // #cmakedefine in comment\n");
        assert_eq!(out.as_str(), "  #define   SPACED  // #define in comment\n");
        assert_eq!(out.replacements(), 2);
    }

    #[test]
    fn crlf_line_endings_are_preserved() {
        let out = apply_default("#cmakedefine A\r\nint a;\r\n");
        assert_eq!(out.as_str(), "#define A\r\nint a;\r\n");
    }

    #[test]
    fn marker_lines_are_one_based() {
        let rule = Substitution::default();
        let lines = rule.marker_lines("int a;\n#cmakedefine A\n\n#cmakedefine B\n");
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn custom_rule_applies() {
        let rule = Substitution::new("@UNDEF@", "#undef").unwrap();
        let out = rule.apply(&TemplateText::new("@UNDEF@ X\n"));
        assert_eq!(out.as_str(), "#undef X\n");
    }

    #[test]
    fn empty_marker_is_rejected() {
        assert_eq!(Substitution::new("", "#define"), Err(DomainError::EmptyMarker));
    }

    #[test]
    fn replacement_containing_marker_is_rejected() {
        let err = Substitution::new("#def", "#define").unwrap_err();
        assert!(matches!(err, DomainError::ReplacementContainsMarker { .. }));
    }

    #[test]
    fn default_tokens_pass_validation() {
        assert_eq!(
            Substitution::new(DEFAULT_MARKER, DEFAULT_REPLACEMENT),
            Ok(Substitution::default())
        );
    }

    // "aabb" -> "aab": the leftover 'a' plus the replacement make a new "ab".
    #[test]
    fn replacement_completing_a_marker_is_rejected() {
        let err = Substitution::new("ab", "a").unwrap_err();
        assert!(matches!(err, DomainError::ReplacementFormsMarker { .. }));
        assert!(matches!(
            Substitution::new("ab", "b"),
            Err(DomainError::ReplacementFormsMarker { .. })
        ));
    }

    #[test]
    fn replacement_inside_the_marker_is_rejected() {
        assert!(matches!(
            Substitution::new("xay", "a"),
            Err(DomainError::ReplacementFormsMarker { .. })
        ));
    }

    // Deleting "#cmakedefine " from "#cmake#cmakedefine define " leaves one.
    #[test]
    fn empty_replacement_is_rejected() {
        assert!(matches!(
            Substitution::new("#cmakedefine ", ""),
            Err(DomainError::ReplacementFormsMarker { .. })
        ));
    }

    #[test]
    fn accepted_custom_rules_are_idempotent() {
        let inputs = ["@@UNDEF@ @UNDEF@@UNDEF@@ X\n", "#undef@UNDEF@#undef\n", "@UNDEF"];
        let rule = Substitution::new("@UNDEF@", "#undef").unwrap();

        for input in inputs {
            let once = rule.apply(&TemplateText::new(input));
            let twice = rule.apply(&TemplateText::new(once.as_str()));
            assert_eq!(once.as_str(), twice.as_str(), "input {input:?}");
            assert_eq!(twice.replacements(), 0);
        }
    }
}
