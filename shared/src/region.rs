#[derive(Clone, Debug, PartialEq, Eq)]
enum RegionPattern {
    Any,
    Exact(String),
    Prefix(String),
    Suffix(String),
}

impl RegionPattern {
    fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            RegionPattern::Any
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            RegionPattern::Prefix(prefix.to_owned())
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            RegionPattern::Suffix(suffix.to_owned())
        } else {
            RegionPattern::Exact(pattern.to_owned())
        }
    }

    fn matches(&self, region: &str) -> bool {
        match self {
            RegionPattern::Any => true,
            RegionPattern::Exact(name) => region == name,
            RegionPattern::Prefix(prefix) => region.starts_with(prefix.as_str()),
            RegionPattern::Suffix(suffix) => region.ends_with(suffix.as_str()),
        }
    }

    fn source(&self) -> String {
        match self {
            RegionPattern::Any => "*".to_owned(),
            RegionPattern::Exact(name) => name.clone(),
            RegionPattern::Prefix(prefix) => format!("{}*", prefix),
            RegionPattern::Suffix(suffix) => format!("*{}", suffix),
        }
    }
}

/// Ordered set of region patterns in which display-name rewriting is
/// suppressed. A pattern is an exact region name, or carries a leading or
/// trailing `*` wildcard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionDenylist {
    patterns: Vec<RegionPattern>,
}

impl RegionDenylist {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<RegionPattern> = Vec::new();
        for pattern in patterns {
            let pattern = RegionPattern::parse(pattern.as_ref());
            if !parsed.contains(&pattern) {
                parsed.push(pattern);
            }
        }
        Self { patterns: parsed }
    }

    /// True if `region` matches any pattern
    pub fn is_denied(&self, region: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(region))
    }

    /// True if players in `region` get their display name rewritten
    pub fn is_eligible(&self, region: &str) -> bool {
        !self.is_denied(region)
    }

    pub fn patterns(&self) -> Vec<String> {
        self.patterns.iter().map(RegionPattern::source).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
