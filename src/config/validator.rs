//! Semantic validation of a services definition.

use crate::config::types::ServicesConfig;
use crate::error::ConfigError;
use crate::route::{convert_url_rule, RouteTemplate};

pub fn validate(config: &ServicesConfig) -> Result<(), ConfigError> {
    for (name, service) in &config.services {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation("service name must not be empty".into()));
        }
        if let Some(arg) = service.args.iter().find(|a| a.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "service '{}': empty argument name {:?}",
                name, arg
            )));
        }
        for (action, endpoint) in &service.endpoints {
            if action.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "service '{}': action name must not be empty",
                    name
                )));
            }
            check_balanced(name, action, endpoint.suffix())?;

            let route = RouteTemplate::parse(convert_url_rule(endpoint.suffix()));
            for placeholder in route.placeholders() {
                let known = service.args.iter().any(|a| a == placeholder)
                    || endpoint.extra_args().iter().any(|a| a == placeholder);
                if !known {
                    tracing::warn!(
                        "service {}.{}: placeholder :{} has no matching argument and will stay in the url",
                        name,
                        action,
                        placeholder
                    );
                }
            }
        }
    }
    Ok(())
}

fn check_balanced(service: &str, action: &str, rule: &str) -> Result<(), ConfigError> {
    let unbalanced = || {
        ConfigError::Validation(format!(
            "service '{}': action '{}' has unbalanced url rule '{}'",
            service, action, rule
        ))
    };
    let mut open = false;
    for c in rule.chars() {
        match c {
            '<' if !open => open = true,
            '>' if open => open = false,
            '<' | '>' => return Err(unbalanced()),
            _ => {}
        }
    }
    if open {
        return Err(unbalanced());
    }
    Ok(())
}
