use crate::config::FilterConfig;
use crate::domain::Reference;
use crate::error::Result;
use crate::pattern::WildcardMatcher;

/// Applies the configured wildcard pattern lists to references.
///
/// Branches and tags each get an include/exclude pair: a reference survives
/// only when its name is in the include set and not in the exclude set, so a
/// matching exclude always wins. Change requests are a one-sided allow-list
/// keyed on the name of the branch they target, not their own name.
#[derive(Debug, Clone)]
pub struct RefFilter {
    config: FilterConfig,
}

impl RefFilter {
    /// Create a filter over a normalized configuration
    pub fn new(config: FilterConfig) -> Self {
        RefFilter { config }
    }

    /// Decide whether a reference must be dropped from further processing.
    ///
    /// Matchers are recompiled per call; the configuration itself never
    /// changes after construction.
    pub fn should_exclude(&self, reference: &Reference) -> Result<bool> {
        match reference {
            Reference::ChangeRequest { target, .. } => {
                let destinations =
                    WildcardMatcher::compile(&self.config.pr_destination_includes)?;
                Ok(!destinations.matches(target.name()))
            }
            Reference::Tag { name } => {
                let includes = WildcardMatcher::compile(&self.config.tag_includes)?;
                let excludes = WildcardMatcher::compile(&self.config.tag_excludes)?;
                Ok(!includes.matches(name) || excludes.matches(name))
            }
            Reference::Branch { name } => {
                let includes = WildcardMatcher::compile(&self.config.includes)?;
                let excludes = WildcardMatcher::compile(&self.config.excludes)?;
                Ok(!includes.matches(name) || excludes.matches(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_filter(
        includes: &str,
        excludes: &str,
        tag_includes: &str,
        tag_excludes: &str,
        pr_destination_includes: &str,
    ) -> RefFilter {
        RefFilter::new(FilterConfig::new(
            includes,
            excludes,
            tag_includes,
            tag_excludes,
            pr_destination_includes,
        ))
    }

    #[test]
    fn test_default_config_keeps_every_branch() {
        let filter = RefFilter::new(FilterConfig::default());
        for name in ["master", "dev", "release/1.0", "feature/login"] {
            assert!(!filter.should_exclude(&Reference::branch(name)).unwrap());
        }
    }

    #[test]
    fn test_default_config_drops_every_tag() {
        let filter = RefFilter::new(FilterConfig::default());
        for name in ["v1.0", "release-2024", "x"] {
            assert!(filter.should_exclude(&Reference::tag(name)).unwrap());
        }
    }

    #[test]
    fn test_default_config_drops_every_change_request() {
        let filter = RefFilter::new(FilterConfig::default());
        let cr = Reference::change_request("PR-1", Reference::branch("main"));
        assert!(filter.should_exclude(&cr).unwrap());
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = make_filter("*", "release/*", "", "", "");
        assert!(filter
            .should_exclude(&Reference::branch("release/1.0"))
            .unwrap());
        assert!(!filter.should_exclude(&Reference::branch("main")).unwrap());
    }

    #[test]
    fn test_branch_outside_include_set_is_dropped() {
        let filter = make_filter("main develop", "", "", "", "");
        assert!(!filter.should_exclude(&Reference::branch("main")).unwrap());
        assert!(!filter.should_exclude(&Reference::branch("develop")).unwrap());
        assert!(filter
            .should_exclude(&Reference::branch("feature/x"))
            .unwrap());
    }

    #[test]
    fn test_tag_include_and_exclude_pair() {
        let filter = make_filter("*", "", "v*", "v0.*", "");
        assert!(!filter.should_exclude(&Reference::tag("v1.0")).unwrap());
        assert!(filter.should_exclude(&Reference::tag("v0.9")).unwrap());
        assert!(filter.should_exclude(&Reference::tag("release-1")).unwrap());
    }

    #[test]
    fn test_tag_patterns_do_not_apply_to_branches() {
        let filter = make_filter("main", "", "v*", "", "");
        assert!(filter.should_exclude(&Reference::branch("v1.0")).unwrap());
        assert!(!filter.should_exclude(&Reference::tag("v1.0")).unwrap());
    }

    #[test]
    fn test_change_request_is_filtered_by_target_name() {
        let filter = make_filter("*", "", "", "", "main");
        let onto_main = Reference::change_request("PR-8", Reference::branch("main"));
        let onto_release = Reference::change_request("PR-7", Reference::branch("release"));
        assert!(!filter.should_exclude(&onto_main).unwrap());
        assert!(filter.should_exclude(&onto_release).unwrap());
    }

    #[test]
    fn test_change_request_own_name_is_irrelevant() {
        let filter = make_filter("*", "", "", "", "main");
        // The request is named like an allowed branch but targets another one
        let decoy = Reference::change_request("main", Reference::branch("release"));
        assert!(filter.should_exclude(&decoy).unwrap());
        let kept = Reference::change_request("release", Reference::branch("main"));
        assert!(!filter.should_exclude(&kept).unwrap());
    }

    #[test]
    fn test_change_request_has_no_exclude_axis() {
        // Branch excludes never apply to change requests
        let filter = make_filter("*", "main", "", "", "main");
        let cr = Reference::change_request("PR-3", Reference::branch("main"));
        assert!(!filter.should_exclude(&cr).unwrap());
    }

    #[test]
    fn test_change_request_destination_wildcards() {
        let filter = make_filter("*", "", "", "", "release/*");
        let cr = Reference::change_request("PR-5", Reference::branch("release/2.0"));
        assert!(!filter.should_exclude(&cr).unwrap());
        let cr = Reference::change_request("PR-6", Reference::branch("main"));
        assert!(filter.should_exclude(&cr).unwrap());
    }
}
