//! Robots.txt rules scanner
//!
//! A deliberately best-effort subset of robots.txt: user-agent blocks are
//! matched case-insensitively against our user agent (or `*`), and within an
//! applicable block any `Disallow:` line whose non-empty path prefixes the
//! requested path disallows it. `Allow:` lines and wildcards are ignored.

/// A group of rules applying to one or more user agents.
#[derive(Debug, Clone)]
struct RuleGroup {
    /// Lowercased agent tokens this group applies to ("*" matches everyone)
    agents: Vec<String>,

    /// Disallowed path prefixes, in file order
    disallows: Vec<String>,
}

impl RuleGroup {
    fn applies_to(&self, user_agent: &str) -> bool {
        let normalized = user_agent.to_lowercase();
        self.agents
            .iter()
            .any(|agent| agent == "*" || normalized.contains(agent.as_str()))
    }
}

/// Parsed robots.txt rules for one domain
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    groups: Vec<RuleGroup>,
}

impl RobotsRules {
    /// Parses raw robots.txt content.
    ///
    /// Consecutive `User-agent:` lines form a single group; `Disallow:`
    /// lines attach to the most recent group. Unknown directives and
    /// comments are skipped.
    pub fn parse(content: &str) -> Self {
        let mut groups: Vec<RuleGroup> = Vec::new();
        let mut last_was_agent = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                last_was_agent = false;
                continue;
            }

            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "user-agent" => {
                    if last_was_agent {
                        if let Some(group) = groups.last_mut() {
                            group.agents.push(value.to_lowercase());
                        }
                    } else {
                        groups.push(RuleGroup {
                            agents: vec![value.to_lowercase()],
                            disallows: Vec::new(),
                        });
                    }
                    last_was_agent = true;
                }
                "disallow" => {
                    if let Some(group) = groups.last_mut() {
                        group.disallows.push(value.to_string());
                    }
                    last_was_agent = false;
                }
                _ => {
                    last_was_agent = false;
                }
            }
        }

        Self { groups }
    }

    /// Checks whether a path is allowed for the given user agent.
    ///
    /// The first matching disallow wins; empty `Disallow:` lines (which mean
    /// "allow all" in robots.txt) never match.
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        for group in self.groups.iter().filter(|g| g.applies_to(user_agent)) {
            for prefix in &group.disallows {
                if !prefix.is_empty() && path.starts_with(prefix.as_str()) {
                    return false;
                }
            }
        }
        true
    }
}
