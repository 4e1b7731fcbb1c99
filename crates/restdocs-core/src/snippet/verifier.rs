//! Verification of documented names against the names observed in an operation.
//!
//! A [`NamedItemVerifier`] is built from two functions: one that extracts the
//! actual names from an [`Operation`] and one that turns the [`Discrepancies`]
//! into a human-readable message. Parameters and headers share this type and
//! differ only in the functions they plug in.
//!
//! Verification returns a [`Result`]; the caller decides whether a failure
//! aborts the enclosing test.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use thiserror::Error;

use super::SnippetError;
use super::table::DocumentedItem;
use crate::operation::Operation;

/// Extracts the actual item names from an operation.
pub type ExtractNames = fn(&Operation) -> Result<BTreeSet<String>, SnippetError>;

/// Formats a failure message from the discrepancies found.
pub type DescribeFailure = fn(&Discrepancies) -> String;

/// How names are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatching {
    #[default]
    Exact,
    /// ASCII case is ignored. Reported names keep their original spelling.
    CaseInsensitive,
}

impl NameMatching {
    fn key(self, name: &str) -> String {
        match self {
            Self::Exact => name.to_string(),
            Self::CaseInsensitive => name.to_ascii_lowercase(),
        }
    }

    fn keys<'a>(self, names: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
        names.into_iter().map(|name| self.key(name)).collect()
    }
}

/// The names a snippet documents.
///
/// `required` is the subset of `documented` that must be present in the
/// operation; optional descriptors are documented but not required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedNames {
    documented: BTreeSet<String>,
    required: BTreeSet<String>,
}

impl ExpectedNames {
    /// Every documented name is also required.
    pub fn all_required<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documented: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            required: documented.clone(),
            documented,
        }
    }

    /// Collect names from descriptors, honouring their optional flag.
    pub fn from_items<D: DocumentedItem>(items: &[D]) -> Self {
        let mut expected = Self::default();
        for item in items {
            expected.documented.insert(item.name().to_string());
            if !item.is_optional() {
                expected.required.insert(item.name().to_string());
            }
        }
        expected
    }

    pub const fn documented(&self) -> &BTreeSet<String> {
        &self.documented
    }

    pub const fn required(&self) -> &BTreeSet<String> {
        &self.required
    }
}

/// The two set differences between documented and actual names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancies {
    /// Present in the operation but not documented.
    pub undocumented: BTreeSet<String>,
    /// Documented as required but absent from the operation.
    pub missing: BTreeSet<String>,
}

impl Discrepancies {
    /// Compute both differences.
    pub fn between(
        expected: &ExpectedNames,
        actual: &BTreeSet<String>,
        matching: NameMatching,
    ) -> Self {
        let documented_keys = matching.keys(&expected.documented);
        let actual_keys = matching.keys(actual);

        let undocumented = actual
            .iter()
            .filter(|name| !documented_keys.contains(&matching.key(name)))
            .cloned()
            .collect();
        let missing = expected
            .required
            .iter()
            .filter(|name| !actual_keys.contains(&matching.key(name)))
            .cloned()
            .collect();

        Self {
            undocumented,
            missing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.undocumented.is_empty() && self.missing.is_empty()
    }
}

/// Documented names disagree with the names found in the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerificationFailure {
    pub message: String,
    pub undocumented: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// Compares documented names with the names extracted from an operation.
#[derive(Debug, Clone)]
pub struct NamedItemVerifier<E = ExtractNames, F = DescribeFailure> {
    extract: E,
    describe: F,
    relaxed: bool,
    matching: NameMatching,
}

impl<E, F> NamedItemVerifier<E, F>
where
    E: Fn(&Operation) -> Result<BTreeSet<String>, SnippetError>,
    F: Fn(&Discrepancies) -> String,
{
    pub fn new(extract: E, describe: F) -> Self {
        Self {
            extract,
            describe,
            relaxed: false,
            matching: NameMatching::Exact,
        }
    }

    /// Tolerate undocumented names. Missing names are still reported.
    #[must_use]
    pub fn relaxed(mut self) -> Self {
        self.relaxed = true;
        self
    }

    #[must_use]
    pub fn with_matching(mut self, matching: NameMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn is_relaxed(&self) -> bool {
        self.relaxed
    }

    /// The names actually present in `operation`.
    pub fn actual_names(&self, operation: &Operation) -> Result<BTreeSet<String>, SnippetError> {
        (self.extract)(operation)
    }

    /// Compare `expected` against an already extracted set of names.
    pub fn compare(
        &self,
        expected: &ExpectedNames,
        actual: &BTreeSet<String>,
    ) -> Result<(), VerificationFailure> {
        let mut discrepancies = Discrepancies::between(expected, actual, self.matching);
        if self.relaxed {
            discrepancies.undocumented.clear();
        }

        if discrepancies.is_empty() {
            tracing::debug!(
                documented = expected.documented.len(),
                actual = actual.len(),
                "Verification passed"
            );
            return Ok(());
        }

        tracing::warn!(
            undocumented = ?discrepancies.undocumented,
            missing = ?discrepancies.missing,
            "Verification failed"
        );
        Err(VerificationFailure {
            message: (self.describe)(&discrepancies),
            undocumented: discrepancies.undocumented,
            missing: discrepancies.missing,
        })
    }

    /// Extract the actual names from `operation` and compare.
    pub fn verify(
        &self,
        operation: &Operation,
        expected: &ExpectedNames,
    ) -> Result<(), SnippetError> {
        let actual = self.actual_names(operation)?;
        self.compare(expected, &actual)?;
        Ok(())
    }
}

impl NamedItemVerifier {
    /// A verifier over plain functions, the form the snippets store.
    pub fn from_fns(extract: ExtractNames, describe: DescribeFailure) -> Self {
        Self::new(extract, describe)
    }
}

/// Build the standard two-clause failure message.
///
/// `kind` names the items (e.g. `"Request parameters"`) and `location` where
/// they were looked for (e.g. `"the request"`). Undocumented names come
/// first; the clauses are joined with `". "` when both are present.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use restdocs_core::snippet::{Discrepancies, describe_discrepancies};
///
/// let discrepancies = Discrepancies {
///     undocumented: BTreeSet::from(["size".to_string()]),
///     missing: BTreeSet::new(),
/// };
/// assert_eq!(
///     describe_discrepancies("Request parameters", "the request", &discrepancies),
///     "Request parameters with the following names were not documented: [size]"
/// );
/// ```
pub fn describe_discrepancies(kind: &str, location: &str, discrepancies: &Discrepancies) -> String {
    let mut message = String::new();
    if !discrepancies.undocumented.is_empty() {
        let _ = write!(
            message,
            "{kind} with the following names were not documented: {}",
            format_names(&discrepancies.undocumented)
        );
    }
    if !discrepancies.missing.is_empty() {
        if !message.is_empty() {
            message.push_str(". ");
        }
        let _ = write!(
            message,
            "{kind} with the following names were not found in {location}: {}",
            format_names(&discrepancies.missing)
        );
    }
    message
}

/// Render names as `[a, b, c]`.
pub fn format_names(names: &BTreeSet<String>) -> String {
    let joined: Vec<&str> = names.iter().map(String::as_str).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationRequest;
    use proptest::prelude::*;

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn describe(discrepancies: &Discrepancies) -> String {
        describe_discrepancies("Items", "the request", discrepancies)
    }

    fn verifier() -> NamedItemVerifier<
        impl Fn(&Operation) -> Result<BTreeSet<String>, SnippetError>,
        impl Fn(&Discrepancies) -> String,
    > {
        NamedItemVerifier::new(
            |operation: &Operation| Ok(operation.request.parameters.names()),
            describe,
        )
    }

    #[test]
    fn test_equal_sets_pass() {
        let result = verifier().compare(&ExpectedNames::all_required(["page"]), &names(&["page"]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_both_empty_pass() {
        let result = verifier().compare(&ExpectedNames::default(), &BTreeSet::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_undocumented_only() {
        let failure = verifier()
            .compare(&ExpectedNames::all_required(["page"]), &names(&["page", "size"]))
            .unwrap_err();
        assert_eq!(failure.undocumented, names(&["size"]));
        assert!(failure.missing.is_empty());
        assert_eq!(
            failure.message,
            "Items with the following names were not documented: [size]"
        );
    }

    #[test]
    fn test_missing_only() {
        let failure = verifier()
            .compare(&ExpectedNames::all_required(["page", "size"]), &names(&["page"]))
            .unwrap_err();
        assert_eq!(failure.missing, names(&["size"]));
        assert_eq!(
            failure.message,
            "Items with the following names were not found in the request: [size]"
        );
    }

    #[test]
    fn test_both_clauses_joined_with_period() {
        let failure = verifier()
            .compare(&ExpectedNames::all_required(["a", "b"]), &names(&["b", "c", "d"]))
            .unwrap_err();
        assert_eq!(
            failure.message,
            "Items with the following names were not documented: [c, d]. \
             Items with the following names were not found in the request: [a]"
        );
    }

    #[test]
    fn test_no_descriptors_reports_everything_undocumented() {
        let failure = verifier()
            .compare(&ExpectedNames::default(), &names(&["page", "size"]))
            .unwrap_err();
        assert_eq!(failure.undocumented, names(&["page", "size"]));
    }

    #[test]
    fn test_relaxed_ignores_undocumented() {
        let relaxed = verifier().relaxed();
        assert!(relaxed.is_relaxed());
        assert!(
            relaxed
                .compare(&ExpectedNames::all_required(["page"]), &names(&["page", "size"]))
                .is_ok()
        );
        let failure = relaxed
            .compare(&ExpectedNames::all_required(["page", "sort"]), &names(&["page", "size"]))
            .unwrap_err();
        assert_eq!(failure.missing, names(&["sort"]));
        assert!(failure.undocumented.is_empty());
    }

    #[test]
    fn test_case_insensitive_matching_keeps_spelling() {
        let verifier = verifier().with_matching(NameMatching::CaseInsensitive);
        assert!(
            verifier
                .compare(&ExpectedNames::all_required(["Content-Type"]), &names(&["content-type"]))
                .is_ok()
        );
        let failure = verifier
            .compare(&ExpectedNames::all_required(["X-Trace-Id"]), &BTreeSet::new())
            .unwrap_err();
        assert_eq!(failure.missing, names(&["X-Trace-Id"]));
    }

    #[test]
    fn test_verify_extracts_from_operation() {
        let operation = Operation::new(
            "list",
            OperationRequest::new("GET", "/users").with_parameter("page", "1"),
        );
        let err = verifier()
            .verify(&operation, &ExpectedNames::all_required(["size"]))
            .unwrap_err();
        let failure = err.as_verification().unwrap();
        assert_eq!(failure.undocumented, names(&["page"]));
        assert_eq!(failure.missing, names(&["size"]));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(format_names(&BTreeSet::new()), "[]");
        assert_eq!(format_names(&names(&["b", "a"])), "[a, b]");
    }

    fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set("[a-e]{1,2}", 0..6)
    }

    proptest! {
        #[test]
        fn prop_fails_iff_sets_differ(documented in name_set(), actual in name_set()) {
            let expected = ExpectedNames::all_required(documented.clone());
            let result = verifier().compare(&expected, &actual);
            prop_assert_eq!(result.is_err(), documented != actual);
        }

        #[test]
        fn prop_failure_reports_exact_differences(documented in name_set(), actual in name_set()) {
            let expected = ExpectedNames::all_required(documented.clone());
            if let Err(failure) = verifier().compare(&expected, &actual) {
                let undocumented: BTreeSet<String> =
                    actual.difference(&documented).cloned().collect();
                let missing: BTreeSet<String> = documented.difference(&actual).cloned().collect();
                prop_assert_eq!(
                    failure.message.contains("not documented"),
                    !undocumented.is_empty()
                );
                prop_assert_eq!(failure.message.contains("not found"), !missing.is_empty());
                prop_assert_eq!(failure.undocumented, undocumented);
                prop_assert_eq!(failure.missing, missing);
            }
        }
    }
}
