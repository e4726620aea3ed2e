//! Route templates with `:name` placeholders, and conversion from `<conv:name>` url rules.

use crate::payload::{render_value, NamedArgs};
use regex::Regex;
use std::sync::OnceLock;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i):([a-z0-9_]+)").expect("static regex"))
}

fn url_rule_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([a-z_]+:)?([a-z0-9_]+)>").expect("static regex"))
}

/// URL and leftover payload for one endpoint call.
#[derive(Clone, Debug, PartialEq)]
pub struct InvocationSpec {
    pub url: String,
    pub data: NamedArgs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteTemplate {
    route: String,
    placeholders: Vec<String>,
}

impl RouteTemplate {
    pub fn parse(route: impl Into<String>) -> Self {
        let route = route.into();
        let placeholders = placeholder_re()
            .captures_iter(&route)
            .map(|c| c[1].to_string())
            .collect();
        RouteTemplate { route, placeholders }
    }

    pub fn as_str(&self) -> &str {
        &self.route
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn is_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p == name)
    }

    /// Substitute placeholder arguments into the route; everything else becomes data.
    /// Only the first literal `:name` is replaced. A placeholder argument without a value
    /// leaves the route text as is.
    pub fn build(&self, args: &NamedArgs) -> InvocationSpec {
        let mut url = self.route.clone();
        let mut data = NamedArgs::new();
        for (name, value) in args.iter() {
            if self.is_placeholder(name) {
                if let Some(v) = value {
                    url = url.replacen(&format!(":{}", name), &render_value(v), 1);
                }
            } else {
                data.insert(name, value.cloned());
            }
        }
        InvocationSpec { url, data }
    }
}

/// `/users/<int:id>` -> `/users/:id`.
pub fn convert_url_rule(rule: &str) -> String {
    url_rule_re().replace_all(rule, ":$2").into_owned()
}
