use fancy_regex::Regex;
use serde::{Deserialize, Serialize};

use crate::state::data_model::{Header, Row};
use crate::state::normalize::normalize;

/// Advanced filter modes. Each one wraps the `|`-joined fragments in a
/// different pattern template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegExpType {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
}

impl RegExpType {
    pub fn all() -> [RegExpType; 8] {
        [
            RegExpType::Contains,
            RegExpType::NotContains,
            RegExpType::Equals,
            RegExpType::NotEquals,
            RegExpType::StartsWith,
            RegExpType::NotStartsWith,
            RegExpType::EndsWith,
            RegExpType::NotEndsWith,
        ]
    }

    pub fn code(self) -> &'static str {
        match self {
            RegExpType::Contains => "cont",
            RegExpType::NotContains => "ncont",
            RegExpType::Equals => "match",
            RegExpType::NotEquals => "nmatch",
            RegExpType::StartsWith => "start",
            RegExpType::NotStartsWith => "nstart",
            RegExpType::EndsWith => "end",
            RegExpType::NotEndsWith => "nend",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|mode| mode.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            RegExpType::Contains => "Contains",
            RegExpType::NotContains => "Does not contain",
            RegExpType::Equals => "Equals",
            RegExpType::NotEquals => "Does not equal",
            RegExpType::StartsWith => "Starts with",
            RegExpType::NotStartsWith => "Does not start with",
            RegExpType::EndsWith => "Ends with",
            RegExpType::NotEndsWith => "Does not end with",
        }
    }
}

/// Synthesizes the pattern source for an advanced filter. Fragments are
/// joined with `|` as-is, so regular-expression syntax inside a fragment is
/// honored. Patterns are user input: never evaluate them anywhere but
/// against the table's own cell text.
pub fn build_pattern(mode: RegExpType, fields: &[String]) -> String {
    let alternatives = fields.join("|");
    match mode {
        RegExpType::Contains => alternatives,
        RegExpType::NotContains => format!("^((?!({alternatives})).)*$"),
        RegExpType::Equals => format!("^({alternatives})$"),
        RegExpType::NotEquals => format!("^(?!({alternatives})$).*$"),
        RegExpType::StartsWith => format!("^({alternatives})"),
        RegExpType::NotStartsWith => format!("^(?!({alternatives}).*$).*$"),
        RegExpType::EndsWith => format!("({alternatives})$"),
        RegExpType::NotEndsWith => format!("^(?!.*({alternatives})$).*$"),
    }
}

/// Compiles a pattern source after running it through the same
/// normalization as the cell text it will be tested against.
pub fn compile_pattern(source: &str) -> Result<Regex, fancy_regex::Error> {
    Regex::new(&normalize(source))
}

/// Per-column filter. `text` holds the simple filter string, or the
/// synthesized pattern source while an advanced filter is applied.
#[derive(Clone, Debug)]
pub struct FilterState {
    pub key: String,
    pub text: String,
    pub is_regexp: bool,
    pub regexp_type: RegExpType,
    pub regexp_fields: Vec<String>,
    compiled: Option<Regex>,
}

impl FilterState {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: String::new(),
            is_regexp: false,
            regexp_type: RegExpType::default(),
            regexp_fields: vec![String::new()],
            compiled: None,
        }
    }

    /// One fresh filter per visible header, in header order.
    pub fn for_headers<'a>(headers: impl IntoIterator<Item = &'a Header>) -> Vec<FilterState> {
        headers
            .into_iter()
            .filter(|h| h.checked)
            .map(|h| FilterState::new(h.key.clone()))
            .collect()
    }

    /// Whitespace counts: a filter of `" "` is active.
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn compiled(&self) -> Option<&Regex> {
        self.compiled.as_ref()
    }

    /// Sets the simple filter text, dropping any applied advanced pattern.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.is_regexp = false;
        self.compiled = None;
    }

    /// Builds and compiles the advanced pattern from the current mode and
    /// fragments. On a compile error nothing is changed. Returns whether the
    /// filter is now in regular-expression mode.
    pub fn apply_advanced(&mut self) -> Result<bool, fancy_regex::Error> {
        let source = build_pattern(self.regexp_type, &self.regexp_fields);
        if source.is_empty() {
            self.text = source;
            self.is_regexp = false;
            self.compiled = None;
            return Ok(false);
        }

        let compiled = compile_pattern(&source)?;
        self.text = source;
        self.is_regexp = true;
        self.compiled = Some(compiled);
        Ok(true)
    }

    pub fn unapply_advanced(&mut self) {
        self.is_regexp = false;
        self.text.clear();
        self.compiled = None;
    }

    pub fn add_field(&mut self) {
        self.regexp_fields.push(String::new());
    }

    /// The first fragment is permanent.
    pub fn remove_field(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.regexp_fields.len() {
            return false;
        }
        self.regexp_fields.remove(index);
        true
    }

    pub fn set_field(&mut self, index: usize, value: String) -> bool {
        match self.regexp_fields.get_mut(index) {
            Some(field) => {
                *field = value;
                true
            }
            None => false,
        }
    }
}

/// A filter reduced to what row matching needs.
#[derive(Debug)]
enum Matcher<'a> {
    Text(String),
    Pattern(&'a Regex),
}

#[derive(Debug)]
pub struct ActiveFilter<'a> {
    key: &'a str,
    matcher: Matcher<'a>,
}

/// Collects the filters that have content. Simple texts are normalized once
/// here rather than per row.
pub fn active_filters(filters: &[FilterState]) -> Vec<ActiveFilter<'_>> {
    filters
        .iter()
        .filter(|f| f.is_active())
        .map(|f| {
            let matcher = match (f.is_regexp, f.compiled()) {
                (true, Some(regex)) => Matcher::Pattern(regex),
                _ => Matcher::Text(normalize(&f.text)),
            };
            ActiveFilter {
                key: &f.key,
                matcher,
            }
        })
        .collect()
}

/// A row passes when every active filter matches its column (logical AND).
pub fn row_matches(row: &Row, filters: &[ActiveFilter<'_>]) -> bool {
    filters.iter().all(|filter| {
        let subject = normalize(&row.display(filter.key));
        match &filter.matcher {
            Matcher::Text(needle) => subject.contains(needle.as_str()),
            // A pattern that hits the backtrack limit counts as no match.
            Matcher::Pattern(regex) => regex.is_match(&subject).unwrap_or(false),
        }
    })
}
