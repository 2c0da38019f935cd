// SPDX-License-Identifier: PMPL-1.0-or-later
//! Text matchers backing the rule catalogue.
//!
//! The `regex` crate has no lookaround, so a negative lookahead placed right
//! after a tag name is modelled as a guard: an anchored regex evaluated at the
//! end of capture group 1. A candidate whose guard matches is rejected and the
//! search resumes one character after the candidate start, which is where a
//! backtracking engine would retry.

use regex::Regex;
use std::ops::Range;

/// Matching strategy of one rule
#[derive(Debug)]
pub enum Matcher {
    /// Plain regex, optionally guarded by a lookahead emulation
    Pattern { regex: Regex, guard: Option<Regex> },
    /// `<h1>...</h1>` followed by `<h3>`-`<h6>` before any `<h2>`
    HeadingSkip(HeadingSkip),
}

impl Matcher {
    /// Unguarded pattern
    pub fn pattern(regex: Regex) -> Self {
        Matcher::Pattern { regex, guard: None }
    }

    /// Pattern whose group 1 ends where `guard` must *not* match
    pub fn guarded(regex: Regex, guard: Regex) -> Self {
        Matcher::Pattern {
            regex,
            guard: Some(guard),
        }
    }

    pub fn heading_skip() -> Self {
        Matcher::HeadingSkip(HeadingSkip::new())
    }

    /// Leftmost acceptable match starting at or after byte offset `start`
    pub fn find_at(&self, content: &str, start: usize) -> Option<Range<usize>> {
        match self {
            Matcher::Pattern { regex, guard: None } => {
                regex.find_at(content, start).map(|m| m.range())
            }
            Matcher::Pattern {
                regex,
                guard: Some(guard),
            } => find_guarded(regex, guard, content, start),
            Matcher::HeadingSkip(scan) => scan.find_at(content, start),
        }
    }

    /// All non-overlapping matches, in discovery order
    pub fn find_all(&self, content: &str) -> Vec<Range<usize>> {
        let mut matches = Vec::new();
        let mut at = 0;

        while at <= content.len() {
            let Some(found) = self.find_at(content, at) else {
                break;
            };
            at = if found.is_empty() {
                next_char(content, found.end)
            } else {
                found.end
            };
            matches.push(found);
        }

        matches
    }
}

fn find_guarded(regex: &Regex, guard: &Regex, content: &str, start: usize) -> Option<Range<usize>> {
    let mut at = start;

    while at <= content.len() {
        let caps = regex.captures_at(content, at)?;
        let whole = caps.get(0)?;

        match caps.get(1) {
            Some(tag) if guard.is_match(&content[tag.end()..]) => {
                at = next_char(content, whole.start());
            }
            _ => return Some(whole.range()),
        }
    }

    None
}

/// Byte offset of the character after the one at `pos`
fn next_char(content: &str, pos: usize) -> usize {
    pos + content[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Scanner for an `<h1>` block whose next heading skips level 2.
///
/// Semantics: for an `<h1 ...>` opening at `s`, try each following `</h1>`
/// in order; the region after that close tag runs up to the first `<h2`
/// (or end of input). If it contains an `<h3>`-`<h6>` opening, the match
/// spans from `s` to the end of the last such opening in the region.
#[derive(Debug)]
pub struct HeadingSkip {
    open: Regex,
    close: Regex,
    level_two: Regex,
    deeper: Regex,
}

impl HeadingSkip {
    fn new() -> Self {
        Self {
            open: Regex::new(r"(?i)<h1[^>]*>").expect("valid regex"),
            close: Regex::new(r"(?i)</h1>").expect("valid regex"),
            level_two: Regex::new(r"(?i)<h2").expect("valid regex"),
            deeper: Regex::new(r"(?i)<h[3-6]").expect("valid regex"),
        }
    }

    fn find_at(&self, content: &str, start: usize) -> Option<Range<usize>> {
        let mut at = start;

        while let Some(open) = self.open.find_at(content, at) {
            let mut close_at = open.end();

            while let Some(close) = self.close.find_at(content, close_at) {
                let region_end = self
                    .level_two
                    .find_at(content, close.end())
                    .map_or(content.len(), |m| m.start());
                let region = &content[close.end()..region_end];

                if let Some(deeper) = self.deeper.find_iter(region).last() {
                    return Some(open.start()..close.end() + deeper.end());
                }
                close_at = close.end();
            }

            at = next_char(content, open.start());
        }

        None
    }
}
