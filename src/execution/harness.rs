//! Test harness generation
//!
//! A test run appends a small driver to the user's code: it turns the test
//! input literal into a value, instantiates `Solution`, calls the entry
//! method and prints the result. Every strategy is a pure function returning
//! `None` when its assumptions do not hold, in which case the code is sent
//! unchanged and any mismatch surfaces later as a compile/runtime verdict.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{HARNESS_ENTRY_METHOD, HARNESS_ENTRY_METHOD_PASCAL, HARNESS_SOLUTION_CLASS};
use crate::models::{Language, TestCase};

/// `(code, test input) -> final code`
type HarnessStrategy = fn(&str, &str) -> Option<String>;

static INTEGER_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\s*(-?\d+\s*(,\s*-?\d+\s*)*)?\]$").expect("valid integer list pattern")
});

fn strategy_for(language: Language) -> Option<HarnessStrategy> {
    match language {
        Language::Python => Some(python),
        Language::Java => Some(java),
        Language::Cpp => Some(cpp),
        Language::CSharp => Some(csharp),
        Language::Sql => None,
    }
}

/// Produce the source actually submitted upstream.
pub fn build(
    language: Language,
    code: &str,
    test_case: Option<&TestCase>,
    is_console_run: bool,
) -> String {
    let input = test_case.map_or("", |tc| tc.input.trim());
    if is_console_run || input.is_empty() {
        return code.to_string();
    }

    let Some(strategy) = strategy_for(language) else {
        return code.to_string();
    };

    match strategy(code, input) {
        Some(wrapped) => wrapped,
        None => {
            tracing::debug!(
                language = %language,
                "Test input does not fit the harness, submitting code unchanged"
            );
            code.to_string()
        }
    }
}

fn python(code: &str, input: &str) -> Option<String> {
    Some(format!(
        "{code}\n\n\
         # Auto-generated test harness\n\
         import ast\n\
         sol = {class}()\n\
         nums = ast.literal_eval({literal})\n\
         result = sol.{method}(nums)\n\
         print(result)\n",
        class = HARNESS_SOLUTION_CLASS,
        literal = python_string_literal(input),
        method = HARNESS_ENTRY_METHOD,
    ))
}

fn java(code: &str, input: &str) -> Option<String> {
    let values = parse_integer_list(input)?;
    Some(format!(
        "{code}\n\n\
         // Auto-generated test harness\n\
         class Main {{\n\
         \x20   public static void main(String[] args) {{\n\
         \x20       int[] nums = new int[] {{{values}}};\n\
         \x20       System.out.println(new {class}().{method}(nums));\n\
         \x20   }}\n\
         }}\n",
        values = join(&values),
        class = HARNESS_SOLUTION_CLASS,
        method = HARNESS_ENTRY_METHOD,
    ))
}

fn cpp(code: &str, input: &str) -> Option<String> {
    let values = parse_integer_list(input)?;
    Some(format!(
        "{code}\n\n\
         // Auto-generated test harness\n\
         #include <iostream>\n\
         #include <vector>\n\
         int main() {{\n\
         \x20   std::vector<int> nums = {{{values}}};\n\
         \x20   {class} sol;\n\
         \x20   std::cout << sol.{method}(nums) << std::endl;\n\
         \x20   return 0;\n\
         }}\n",
        values = join(&values),
        class = HARNESS_SOLUTION_CLASS,
        method = HARNESS_ENTRY_METHOD,
    ))
}

fn csharp(code: &str, input: &str) -> Option<String> {
    let values = parse_integer_list(input)?;
    Some(format!(
        "{code}\n\n\
         // Auto-generated test harness\n\
         public static class HarnessMain {{\n\
         \x20   public static void Main(string[] args) {{\n\
         \x20       int[] nums = new int[] {{{values}}};\n\
         \x20       System.Console.WriteLine(new {class}().{method}(nums));\n\
         \x20   }}\n\
         }}\n",
        values = join(&values),
        class = HARNESS_SOLUTION_CLASS,
        method = HARNESS_ENTRY_METHOD_PASCAL,
    ))
}

/// Parse `[3, 4, -1, 1]` into 32-bit integers
fn parse_integer_list(input: &str) -> Option<Vec<i32>> {
    if !INTEGER_LIST.is_match(input) {
        return None;
    }

    let inner = input.trim_start_matches('[').trim_end_matches(']');
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<i32>().ok())
        .collect()
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Single-quoted Python string literal holding `text` verbatim
fn python_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for c in text.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            other => literal.push(other),
        }
    }
    literal.push('\'');
    literal
}
