//! Rule extraction infrastructure (matchers)

pub mod deontic_patterns;
pub mod regex_templates;

pub use deontic_patterns::{extract_components, find_deontic_matches, DeonticMatch, RuleComponents};
pub use regex_templates::{match_templates, TemplateMatch, TEMPLATE_CONFIDENCE};
