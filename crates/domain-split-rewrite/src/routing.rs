use domain_split_toml::{
    ConfigError, DEFAULT_DOMAIN, DomainSplitConfig, RoutingRule, validate_rules,
};

/// Why a file is left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The path is in the skip set.
    Excluded,
    /// The path routes to the default domain.
    DefaultDomain,
    /// No rule matches the path.
    Unmatched,
}

/// Routing decision for one source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Rewrite(&'a str),
    Skip(SkipReason),
}

/// Ordered prefix table mapping source paths to gettext domains.
#[derive(Clone, Debug)]
pub struct DomainRouter {
    rules: Vec<RoutingRule>,
    skip_files: Vec<String>,
}

impl DomainRouter {
    /// Builds a router, rejecting tables with empty or shadowed rules.
    pub fn new(rules: Vec<RoutingRule>, skip_files: Vec<String>) -> Result<Self, ConfigError> {
        validate_rules(&rules)?;
        Ok(Self { rules, skip_files })
    }

    pub fn from_config(config: &DomainSplitConfig) -> Result<Self, ConfigError> {
        Self::new(config.rules.clone(), config.skip_files.clone())
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    /// Domain of the first rule whose prefix starts `path`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| path.starts_with(&rule.prefix))
            .map(|rule| rule.domain.as_str())
    }

    /// Whether `path` equals or ends with an entry of the skip set.
    pub fn is_skipped(&self, path: &str) -> bool {
        self.skip_files
            .iter()
            .any(|skip| path == skip || path.ends_with(skip.as_str()))
    }

    pub fn route(&self, path: &str) -> Route<'_> {
        if self.is_skipped(path) {
            return Route::Skip(SkipReason::Excluded);
        }
        match self.resolve(path) {
            None => Route::Skip(SkipReason::Unmatched),
            Some(DEFAULT_DOMAIN) => Route::Skip(SkipReason::DefaultDomain),
            Some(domain) => Route::Rewrite(domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn router() -> DomainRouter {
        DomainRouter::new(
            vec![
                RoutingRule::new("web/live/flow_live/", "flows"),
                RoutingRule::new("web/components/sidebar/flow_tree.ex", "flows"),
                RoutingRule::new("web/live/settings_live/profile.ex", "settings"),
                RoutingRule::new("web/live/settings_live/workspace", "workspaces"),
                RoutingRule::new("web/components/layouts.ex", DEFAULT_DOMAIN),
                RoutingRule::new("web/helpers/authorize.ex", DEFAULT_DOMAIN),
            ],
            vec!["web/helpers/authorize.ex".to_string()],
        )
        .unwrap()
    }

    #[rstest]
    #[case::directory_prefix("web/live/flow_live/show.ex", Some("flows"))]
    #[case::nested("web/live/flow_live/components/node.ex", Some("flows"))]
    #[case::exact_file("web/components/sidebar/flow_tree.ex", Some("flows"))]
    #[case::partial_name("web/live/settings_live/workspace_members.ex", Some("workspaces"))]
    #[case::default("web/components/layouts.ex", Some("default"))]
    #[case::unmatched("web/live/user_live/login.ex", None)]
    #[case::not_a_prefix_match("lib/web/live/flow_live/show.ex", None)]
    fn test_resolve(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(router().resolve(path), expected);
    }

    #[rstest]
    #[case("web/live/flow_live/show.ex", Route::Rewrite("flows"))]
    #[case("web/components/layouts.ex", Route::Skip(SkipReason::DefaultDomain))]
    #[case("web/live/user_live/login.ex", Route::Skip(SkipReason::Unmatched))]
    #[case("web/helpers/authorize.ex", Route::Skip(SkipReason::Excluded))]
    fn test_route(#[case] path: &str, #[case] expected: Route<'static>) {
        assert_eq!(router().route(path), expected);
    }

    #[test]
    fn test_skip_set_wins_over_any_rule() {
        let router = DomainRouter::new(
            vec![RoutingRule::new("web/helpers/", "helpers")],
            vec!["helpers/authorize.ex".to_string()],
        )
        .unwrap();
        assert_eq!(router.resolve("web/helpers/authorize.ex"), Some("helpers"));
        assert_eq!(
            router.route("web/helpers/authorize.ex"),
            Route::Skip(SkipReason::Excluded)
        );
        assert_eq!(router.route("web/helpers/format.ex"), Route::Rewrite("helpers"));
    }

    #[test]
    fn test_earlier_rule_wins_on_overlap() {
        let router = DomainRouter::new(
            vec![
                RoutingRule::new("web/live/settings_live/profile", "settings"),
                RoutingRule::new("web/live/", "live"),
            ],
            Vec::new(),
        )
        .unwrap();
        assert_eq!(
            router.resolve("web/live/settings_live/profile.ex"),
            Some("settings")
        );
        assert_eq!(router.resolve("web/live/settings_live/other.ex"), Some("live"));
    }

    #[test]
    fn test_shadowed_table_is_rejected() {
        let result = DomainRouter::new(
            vec![
                RoutingRule::new("web/live/", "live"),
                RoutingRule::new("web/live/flow_live/", "flows"),
            ],
            Vec::new(),
        );
        assert!(matches!(result, Err(ConfigError::ShadowedRule { .. })));
    }

    #[test]
    fn test_default_configuration_routes_every_rule_to_its_domain() {
        let config = DomainSplitConfig::default();
        let router = DomainRouter::from_config(&config).unwrap();
        for rule in router.rules() {
            assert_eq!(router.resolve(&rule.prefix), Some(rule.domain.as_str()));
            let extended = format!("{}x.ex", rule.prefix);
            assert_eq!(router.resolve(&extended), Some(rule.domain.as_str()));
        }
        assert_eq!(
            router.route("storyarn_web/helpers/authorize.ex"),
            Route::Skip(SkipReason::Excluded)
        );
    }
}
