//! Expression normalizer
//!
//! Rewrites what the user typed (display glyphs, named constants, function
//! keys) into the canonical text accepted by the [`Lexer`]. Normalization
//! never fails; anything it does not recognise is passed through and left
//! for the parser to reject.
//!
//! | Input            | Output                              |
//! |------------------|-------------------------------------|
//! | `×` `÷` `−`      | `*` `/` `-`                         |
//! | `%`              | `/(100)`                            |
//! | `π`, `pi`        | `(3.141592653589793)`               |
//! | `e`              | `(2.718281828459045)`               |
//! | `sin(x)` in DEG  | `sin((x)*0.017453292519943295)`     |
//!
//! The degree scaling is emitted where the call's own argument closes. A
//! call still open at the end is closed there together with any groups
//! opened inside it, and [`balance_parentheses`] then closes whatever else
//! the user left open. The conversion is plain arithmetic, so no helper
//! function is reachable from user input.
//!
//! [`Lexer`]: super::lexer::Lexer

use super::ast::Function;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PI_LITERAL: &str = "(3.141592653589793)";
const E_LITERAL: &str = "(2.718281828459045)";
const PERCENT_SUFFIX: &str = "/(100)";
/// `π / 180`, the same factor `f64::to_radians` uses
const DEGREES_TO_RADIANS: &str = "0.017453292519943295";

/// How trigonometric arguments are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    #[serde(rename = "DEG", alias = "deg", alias = "degrees")]
    Degrees,
    #[serde(rename = "RAD", alias = "rad", alias = "radians")]
    Radians,
}

impl AngleMode {
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleMode {
    type Err = ();

    /// Accepts exactly the display names `DEG` and `RAD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEG" => Ok(AngleMode::Degrees),
            "RAD" => Ok(AngleMode::Radians),
            _ => Err(()),
        }
    }
}

/// Open parenthesis kinds tracked while rewriting
#[derive(Clone, Copy, PartialEq, Eq)]
enum Group {
    Plain,
    DegreeWrapped,
}

/// Rewrite `raw` into canonical expression text for the given angle mode.
pub fn normalize(raw: &str, mode: AngleMode) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 16);
    let mut groups: Vec<Group> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            '%' => out.push_str(PERCENT_SUFFIX),
            'π' => out.push_str(PI_LITERAL),
            '(' => {
                groups.push(Group::Plain);
                out.push('(');
            }
            ')' => match groups.pop() {
                Some(Group::DegreeWrapped) => close_degree_call(&mut out),
                _ => out.push(')'),
            },
            'e' | 'E' if is_exponent_marker(&chars, i) => out.push(ch),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();

                match word.as_str() {
                    "e" => out.push_str(E_LITERAL),
                    "pi" => out.push_str(PI_LITERAL),
                    name => {
                        out.push_str(name);
                        let is_trig =
                            Function::from_name(name).is_some_and(Function::is_trigonometric);
                        if is_trig && mode == AngleMode::Degrees {
                            // The lexer skips blanks, so `sin (30)` is a call too
                            let mut next = i;
                            while chars.get(next).is_some_and(|c| c.is_whitespace()) {
                                next += 1;
                            }
                            if chars.get(next) == Some(&'(') {
                                out.push_str("((");
                                groups.push(Group::DegreeWrapped);
                                i = next + 1;
                            }
                        }
                    }
                }
                continue;
            }
            other => out.push(other),
        }
        i += 1;
    }

    // Close every group up to the outermost open degree call so the scaling
    // applies to the whole argument
    if let Some(outermost) = groups.iter().position(|g| *g == Group::DegreeWrapped) {
        for group in groups[outermost..].iter().rev() {
            match group {
                Group::DegreeWrapped => close_degree_call(&mut out),
                Group::Plain => out.push(')'),
            }
        }
    }

    out
}

fn close_degree_call(out: &mut String) {
    out.push_str(")*");
    out.push_str(DEGREES_TO_RADIANS);
    out.push(')');
}

/// Append closing parentheses for every `(` that has no partner.
pub fn balance_parentheses(expr: &str) -> String {
    let opens = expr.chars().filter(|&c| c == '(').count();
    let closes = expr.chars().filter(|&c| c == ')').count();

    let mut balanced = expr.to_string();
    for _ in closes..opens {
        balanced.push(')');
    }
    balanced
}

/// An `e` directly after a number and before an (optionally signed)
/// integer is scientific notation, as produced by the result formatter.
fn is_exponent_marker(chars: &[char], i: usize) -> bool {
    let after_number = i > 0 && (chars[i - 1].is_ascii_digit() || chars[i - 1] == '.');
    if !after_number {
        return false;
    }
    match chars.get(i + 1) {
        Some(c) if c.is_ascii_digit() => true,
        Some('+' | '-') => chars.get(i + 2).is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}
