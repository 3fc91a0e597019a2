/// namevar-core: The patient clerk who knows every way you might sign your name
///
/// Hand this library a full name and it will tell you whether "M. V. Sinha"
/// or "Sinha Mrinal" is really the same person on the other side of the
/// counter. Ask it nothing in particular and it will happily recite every
/// spelling it would accept.
///
/// ## Two Ways to Ask
///
/// **Lookup**: "Is this you?"
/// - Compares case-insensitively, so shouting is fine
/// - Accepts reordered words, lone words, and initials before or after the family name
/// - Stops at the first spelling that fits
///
/// **Enumeration**: "Who could you be?"
/// - Walks every permutation of the name's words
/// - Builds eight initials-based spellings per permutation of the given names
/// - Adds the rotated-initial form for longer given-name runs
/// - Collapses duplicates into a tidy, sorted set
///
/// ## A Sample Conversation
///
/// ```rust
/// use namevar_core::variants::{validate_name, Validation};
/// use namevar_core::name::CanonicalName;
///
/// let name = CanonicalName::parse("Mrinal Vinay Sinha")?;
/// assert!(name.accepts("Sinha Mrinal Vinay"));
/// assert!(name.accepts("M. V. Sinha"));
/// assert!(!name.accepts("Totally Different Name"));
///
/// match validate_name("Mrinal Sinha", None)? {
///     Validation::Variants(set) => assert!(set.contains("sinha m")),
///     Validation::Verdict(_) => unreachable!("no candidate was supplied"),
/// }
/// #
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## A Word on Appetite
///
/// The engine enumerates literally rather than cleverly: a name with `n`
/// words yields `sum(n!/(n-k)!)` reorderings before initials even enter the
/// room. Names rarely carry more than four words, so this stays cheap, but
/// don't feed it a paragraph.
///
/// ## The Cast of Characters
///
/// - [`name::CanonicalName`]: The reference name, split into given and family words
/// - [`variants::VariantSet`]: Every accepted spelling, sorted and deduplicated
/// - [`variants::Validation`]: Either a verdict or a full variant set
/// - [`error::NameError`]: What you get for handing over a blank form
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/

pub mod error;
pub mod name;
pub mod output;
pub mod variants;
