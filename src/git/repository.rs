use crate::domain::Reference;
use crate::error::Result;
use crate::git::RefSource;
use git2::{BranchType, Repository};
use std::path::Path;

/// Reference source backed by a local git repository via the `git2` crate.
pub struct Git2RefSource {
    repo: Repository,
}

impl Git2RefSource {
    /// Discover the repository at or above the given path.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2RefSource { repo })
    }
}

impl RefSource for Git2RefSource {
    /// Lists every local branch and every tag, sorted by name within each
    /// kind for stable output.
    fn references(&self) -> Result<Vec<Reference>> {
        let mut branch_names = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                branch_names.push(name.to_string());
            }
        }
        branch_names.sort();

        let mut tag_names: Vec<String> = self
            .repo
            .tag_names(None)?
            .iter()
            .flatten()
            .map(|name| name.to_string())
            .collect();
        tag_names.sort();

        let mut references: Vec<Reference> =
            branch_names.into_iter().map(Reference::branch).collect();
        references.extend(tag_names.into_iter().map(Reference::tag));
        Ok(references)
    }
}
