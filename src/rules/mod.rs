// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule catalogue - WCAG 2.0 AA anti-pattern detectors.
//!
//! | Rule                      | WCAG  | Severity | Detects                                   |
//! |---------------------------|-------|----------|-------------------------------------------|
//! | `generic_alt`             | 1.1.1 | Major    | `alt="image"` and similar placeholders    |
//! | `missing_alt`             | 1.1.1 | Critical | `<img>` without an `alt` attribute        |
//! | `div_onclick`             | 4.1.2 | Critical | click handlers on `<div>`/`<span>`        |
//! | `ambiguous_link`          | 2.4.4 | Major    | "click here", "read more" link text       |
//! | `input_no_label`          | 3.3.2 | Critical | `<input>` without label or `aria-label`   |
//! | `heading_skip`            | 1.3.1 | Minor    | `<h1>` followed by `<h3>`-`<h6>`          |
//! | `positive_tabindex`       | 2.4.3 | Major    | `tabIndex="1"` and higher                 |
//! | `missing_lang`            | 3.1.1 | Critical | `<html>` without `lang`                   |
//! | `unnecessary_autofocus`   | 2.4.3 | Minor    | `autoFocus`                               |
//! | `color_only`              | 1.4.1 | Major    | inline color keyed on an error status     |
//! | `heading_component_level` | 1.3.1 | Major    | `<Heading>` without `as`/`level`          |
//! | `button_as_link`          | 4.1.2 | Minor    | `<Button href=...>`                       |
//!
//! The first ten rules are generic markup detectors; the last two cover
//! design-system component conventions. All matching is case-insensitive and
//! runs over the whole file, so constructs may span lines.

pub mod matcher;

pub use matcher::Matcher;

use crate::issue::Severity;
use regex::Regex;
use std::sync::LazyLock;

/// One catalogue entry: a matcher plus the metadata copied into its issues
#[derive(Debug)]
pub struct Rule {
    /// Unique catalogue key
    pub name: &'static str,
    pub matcher: Matcher,
    pub severity: Severity,
    /// WCAG success criterion
    pub wcag: &'static str,
    pub issue_type: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

static CATALOGUE: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            name: "generic_alt",
            matcher: Matcher::pattern(re(
                r#"(?is)alt=["'](image|photo|picture|icon|logo|graphic|img)["']\s*/?>"#,
            )),
            severity: Severity::Major,
            wcag: "1.1.1",
            issue_type: "Non-descriptive alt text",
            description: "Alt text should describe image content/purpose",
            recommendation: "Use descriptive alt text that conveys image meaning",
        },
        Rule {
            name: "missing_alt",
            matcher: Matcher::guarded(re(r"(?is)(<img)[^>]*>"), re(r"(?is)\A[^>]*alt=")),
            severity: Severity::Critical,
            wcag: "1.1.1",
            issue_type: "Missing alt text",
            description: "Images must have alt attribute",
            recommendation: "Add alt=\"\" for decorative or descriptive alt text",
        },
        Rule {
            name: "div_onclick",
            matcher: Matcher::pattern(re(r"(?is)<(div|span)(?:[^>]*)\s+onClick=")),
            severity: Severity::Critical,
            wcag: "4.1.2",
            issue_type: "Non-semantic interactive element",
            description: "Use semantic button element for click handlers",
            recommendation: "Replace with <button> or add role=\"button\" with keyboard support",
        },
        Rule {
            name: "ambiguous_link",
            matcher: Matcher::pattern(re(
                r"(?is)>(click here|read more|more|link|here|go)</a>",
            )),
            severity: Severity::Major,
            wcag: "2.4.4",
            issue_type: "Non-descriptive link text",
            description: "Link text should describe destination",
            recommendation: "Use descriptive link text or aria-label",
        },
        Rule {
            name: "input_no_label",
            matcher: Matcher::guarded(
                re(r"(?is)(<input)[^>]*>"),
                re(r#"(?is)\A(?:[^>]*aria-label|[^>]*id=["'][^"']*["'][^>]*>[^<]*<label[^>]*for=)"#),
            ),
            severity: Severity::Critical,
            wcag: "3.3.2",
            issue_type: "Form input without label",
            description: "Form inputs must have associated labels",
            recommendation: "Add <label> with htmlFor or aria-label",
        },
        Rule {
            name: "heading_skip",
            matcher: Matcher::heading_skip(),
            severity: Severity::Minor,
            wcag: "1.3.1",
            issue_type: "Skipped heading level",
            description: "Heading hierarchy should not skip levels",
            recommendation: "Use sequential heading levels (h1 → h2 → h3)",
        },
        Rule {
            name: "positive_tabindex",
            matcher: Matcher::pattern(re(r#"(?is)tabIndex=["']?[1-9]\d*["']?"#)),
            severity: Severity::Major,
            wcag: "2.4.3",
            issue_type: "Positive tabIndex",
            description: "Avoid positive tabIndex values",
            recommendation: "Use tabIndex={0} or {-1}, rely on natural DOM order",
        },
        Rule {
            name: "missing_lang",
            matcher: Matcher::guarded(re(r"(?is)(<html)[^>]*>"), re(r"(?is)\A[^>]*lang=")),
            severity: Severity::Critical,
            wcag: "3.1.1",
            issue_type: "Missing page language",
            description: "HTML must have lang attribute",
            recommendation: "Add lang=\"en\" or appropriate language code",
        },
        Rule {
            name: "unnecessary_autofocus",
            matcher: Matcher::pattern(re(r#"(?is)autoFocus(?:=["']?true["']?)?"#)),
            severity: Severity::Minor,
            wcag: "2.4.3",
            issue_type: "Unnecessary autoFocus",
            description: "Avoid autoFocus except for primary action",
            recommendation: "Remove autoFocus unless critical for user flow",
        },
        Rule {
            name: "color_only",
            matcher: Matcher::pattern(re(
                r#"(?is)style=\{\{[^}]*color:\s*[^}]*status\s*===\s*["']error["']"#,
            )),
            severity: Severity::Major,
            wcag: "1.4.1",
            issue_type: "Color-only status indication",
            description: "Don't rely solely on color to convey information",
            recommendation: "Add icon, text, or other visual indicator",
        },
        // Design-system components
        Rule {
            name: "heading_component_level",
            matcher: Matcher::guarded(
                re(r"(?is)(<Heading)[^>]*>"),
                re(r"(?is)\A[^>]*(?:as=|level=)"),
            ),
            severity: Severity::Major,
            wcag: "1.3.1",
            issue_type: "Heading without semantic level",
            description: "Heading component missing as or level prop",
            recommendation: "Add as=\"h2\" or level={2} prop",
        },
        Rule {
            name: "button_as_link",
            matcher: Matcher::pattern(re(r"(?is)<Button[^>]*href=")),
            severity: Severity::Minor,
            wcag: "4.1.2",
            issue_type: "Button used as link",
            description: "Button with href should be Link component",
            recommendation: "Use Link component for navigation",
        },
    ]
});

/// The full catalogue, in evaluation order
pub fn catalogue() -> &'static [Rule] {
    &CATALOGUE
}

/// Look up a rule by its catalogue key
pub fn find(name: &str) -> Option<&'static Rule> {
    catalogue().iter().find(|r| r.name == name)
}
