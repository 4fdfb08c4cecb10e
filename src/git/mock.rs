use crate::domain::Reference;
use crate::error::Result;
use crate::git::RefSource;

/// Mock reference source for testing without an actual git repository
pub struct MockRefSource {
    references: Vec<Reference>,
}

impl MockRefSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockRefSource {
            references: Vec::new(),
        }
    }

    /// Add a branch reference
    pub fn add_branch(&mut self, name: impl Into<String>) {
        self.references.push(Reference::branch(name));
    }

    /// Add a tag reference
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.references.push(Reference::tag(name));
    }

    /// Add a change request targeting the given branch
    pub fn add_change_request(
        &mut self,
        name: impl Into<String>,
        target_branch: impl Into<String>,
    ) {
        self.references
            .push(Reference::change_request(name, Reference::branch(target_branch)));
    }
}

impl Default for MockRefSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RefSource for MockRefSource {
    fn references(&self) -> Result<Vec<Reference>> {
        Ok(self.references.clone())
    }
}
