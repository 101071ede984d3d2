//! Line coloring rules
//!
//! A rule pairs a pattern with the colors a matching line is drawn in. Rules
//! are tried in order and the first match wins; lines nothing matches use the
//! set's default style.

use image::Rgb;
use regex::Regex;

/// Colors a line is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub text: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl LineStyle {
    pub const fn new(text: [u8; 3], background: [u8; 3]) -> Self {
        Self {
            text: Rgb(text),
            background: Rgb(background),
        }
    }
}

const INK: [u8; 3] = [0x24, 0x29, 0x2F];
const PAPER: [u8; 3] = [0xFF, 0xFF, 0xFF];
const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
const RED: [u8; 3] = [0xCF, 0x22, 0x2E];
const YELLOW: [u8; 3] = [0xFF, 0xD3, 0x3D];
const BLUE: [u8; 3] = [0x09, 0x69, 0xDA];

/// Black on white
pub const DEFAULT_STYLE: LineStyle = LineStyle::new(INK, PAPER);
pub const ERROR_STYLE: LineStyle = LineStyle::new(WHITE, RED);
pub const WARNING_STYLE: LineStyle = LineStyle::new(INK, YELLOW);
pub const GROUP_STYLE: LineStyle = LineStyle::new(WHITE, BLUE);
pub const COMMAND_STYLE: LineStyle = LineStyle::new(BLUE, PAPER);

/// A single coloring rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    pub style: LineStyle,
}

impl Rule {
    /// Builds a rule from a regular expression
    pub fn new(pattern: &str, style: LineStyle) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            style,
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Ordered rules plus the fallback style
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    default_style: LineStyle,
}

impl RuleSet {
    /// An empty rule set; every line gets `default_style`
    pub fn new(default_style: LineStyle) -> Self {
        Self {
            rules: Vec::new(),
            default_style,
        }
    }

    /// Appends a rule after the existing ones
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_style(&self) -> LineStyle {
        self.default_style
    }

    /// Style of the first rule matching `line`
    pub fn style_for(&self, line: &str) -> LineStyle {
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map(|rule| rule.style)
            .unwrap_or(self.default_style)
    }
}

impl Default for RuleSet {
    /// Highlights errors, warnings and the workflow-command markers runners
    /// write into job logs.
    fn default() -> Self {
        let builtin = [
            (
                r"(?i)##\[error\]|\berror\b|\bfailed\b|\bfailure\b|\bpanicked\b",
                ERROR_STYLE,
            ),
            (r"(?i)##\[warning\]|\bwarn(ing)?\b", WARNING_STYLE),
            (r"##\[(group|section)\]", GROUP_STYLE),
            (r"##\[command\]", COMMAND_STYLE),
        ];

        builtin
            .into_iter()
            .fold(Self::new(DEFAULT_STYLE), |set, (pattern, style)| {
                let rule = Rule::new(pattern, style).expect("builtin rule pattern is valid");
                set.with_rule(rule)
            })
    }
}
