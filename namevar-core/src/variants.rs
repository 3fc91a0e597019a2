//! Variant generation and candidate matching (made by FontLab https://www.fontlab.com/)

use std::collections::{btree_set, BTreeSet};
use std::ops::ControlFlow;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::NameError;
use crate::name::CanonicalName;

/// Token count above which enumeration gets noticeably expensive.
///
/// The variant universe grows factorially with the token count; the engine
/// logs a warning past this point but always produces the full set.
pub const LARGE_NAME_TOKENS: usize = 6;

type InitialsTemplate = fn(&[char], &str) -> String;
type RotatedTemplate = fn(&str, &str) -> String;

const INITIALS_TEMPLATES: [InitialsTemplate; 8] = [
    |initials, family| format!("{} {family}", glued(initials)),
    |initials, family| format!("{} {family}", initials.iter().join(" ")),
    |initials, family| format!("{} {family}", initials.iter().join(". ")),
    |initials, family| format!("{}. {family}", initials.iter().join(". ")),
    |initials, family| format!("{family} {}", glued(initials)),
    |initials, family| format!("{family} {}", initials.iter().join(" ")),
    |initials, family| format!("{family} {}", initials.iter().join(". ")),
    |initials, family| format!("{family}. {}", initials.iter().join(". ")),
];

const ROTATED_TEMPLATES: [RotatedTemplate; 2] = [
    |rotated, family| format!("{rotated} {family}"),
    |rotated, family| format!("{family} {rotated}"),
];

fn glued(initials: &[char]) -> String {
    initials.iter().collect()
}

/// Deduplicated, sorted set of every accepted spelling of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSet(BTreeSet<String>);

impl VariantSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.0.contains(variant)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.0.iter()
    }
}

impl FromIterator<String> for VariantSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of [`validate_name`]: a verdict when a candidate was given,
/// otherwise the whole variant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Validation {
    Verdict(bool),
    Variants(VariantSet),
}

/// Check `candidate` against `canonical`, or enumerate every accepted
/// variant when no candidate is supplied.
///
/// Fails only when `canonical` has no tokens.
pub fn validate_name(canonical: &str, candidate: Option<&str>) -> Result<Validation, NameError> {
    let name = CanonicalName::parse(canonical)?;

    Ok(match candidate {
        Some(candidate) => Validation::Verdict(name.accepts(candidate)),
        None => Validation::Variants(name.variants()),
    })
}

impl CanonicalName {
    /// Case-insensitive membership test against this name's variant set.
    ///
    /// Stops at the first generated spelling that matches. Candidates that
    /// write initials without spaces ("m.v. sinha") are also tried in the
    /// spaced form ("m. v. sinha").
    pub fn accepts(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        if candidate == self.as_str() {
            trace!(%candidate, "exact match");
            return true;
        }

        let spellings = candidate_spellings(candidate);
        warn_if_large(self);

        let matched = walk_variants(self, |variant| {
            if spellings.iter().any(|s| *s == variant) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break();

        trace!(candidate = %spellings[0], matched, "checked candidate");
        matched
    }

    /// Every spelling [`CanonicalName::accepts`] would say yes to, lower-cased.
    pub fn variants(&self) -> VariantSet {
        warn_if_large(self);

        let mut found = BTreeSet::new();
        let _ = walk_variants(self, |variant| {
            found.insert(variant);
            ControlFlow::<()>::Continue(())
        });

        debug!(
            tokens = self.tokens().len(),
            variants = found.len(),
            "enumerated name variants"
        );
        VariantSet(found)
    }
}

/// Feed every generated spelling to `visit` until it asks to stop.
///
/// Duplicates are emitted as generated; callers that need a set collapse them.
fn walk_variants<F>(name: &CanonicalName, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(String) -> ControlFlow<()>,
{
    let tokens = name.tokens();
    for k in 1..=tokens.len() {
        for perm in tokens.iter().permutations(k) {
            visit(perm.into_iter().join(" "))?;
        }
    }

    let family = name.family();
    let given = name.given();
    for k in 1..=given.len() {
        for perm in given.iter().permutations(k) {
            let initials: Vec<char> = perm.iter().filter_map(|t| t.chars().next()).collect();
            for template in INITIALS_TEMPLATES {
                visit(template(&initials, family))?;
            }

            if k > 1 {
                let rotated = rotate_first_initial(&perm);
                for template in ROTATED_TEMPLATES {
                    visit(template(&rotated, family))?;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// `[a, b, c]` becomes `"b c a0"`: later tokens in full, then the first
/// token's initial.
fn rotate_first_initial(perm: &[&String]) -> String {
    let Some((first, rest)) = perm.split_first() else {
        return String::new();
    };

    rest.iter()
        .map(|t| t.to_string())
        .chain(first.chars().next().map(String::from))
        .join(" ")
}

fn candidate_spellings(candidate: String) -> Vec<String> {
    static COMPACT_INITIAL: OnceLock<Regex> = OnceLock::new();
    let re = COMPACT_INITIAL.get_or_init(|| Regex::new(r"\.(\S)").expect("static regex"));

    let spaced = re.replace_all(&candidate, ". $1").into_owned();
    if spaced == candidate {
        vec![candidate]
    } else {
        vec![candidate, spaced]
    }
}

fn warn_if_large(name: &CanonicalName) {
    let count = name.tokens().len();
    if count > LARGE_NAME_TOKENS {
        warn!(
            tokens = count,
            "name has more than {LARGE_NAME_TOKENS} tokens; variant generation grows factorially"
        );
    }
}
