use crate::foundation::error::{FolioError, FolioResult};
use crate::site::nav::NavTarget;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../../data/case_studies.json");

/// Fallback shown for a project route whose id has no case study.
pub const NOT_FOUND_MESSAGE: &str = "Project not found";

/// Anchor the case-study page links back to.
pub const BACK_ANCHOR: &str = "projects";

/// One project's long-form write-up.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    pub category: String,
    pub hero_image: String,
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Entry {
    id: String,
    #[serde(flatten)]
    study: CaseStudy,
}

/// Read-only, ordered mapping from project id to case study.
///
/// Key order is the file order and defines "next project" iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentTable {
    entries: Vec<(String, CaseStudy)>,
}

impl ContentTable {
    /// Table shipped with the crate.
    pub fn builtin() -> FolioResult<Self> {
        Self::from_reader(BUILTIN_JSON.as_bytes())
    }

    /// Build a table from `(id, study)` pairs. Ids must be non-empty and unique.
    pub fn from_entries(entries: Vec<(String, CaseStudy)>) -> FolioResult<Self> {
        let mut seen = BTreeSet::new();
        for (id, _) in &entries {
            if id.trim().is_empty() {
                return Err(FolioError::content("case study id must be non-empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(FolioError::content(format!("duplicate case study id '{id}'")));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{ "id": .., "title": .., .. }` records.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let entries: Vec<Entry> =
            serde_json::from_reader(r).map_err(|e| FolioError::json("case study", e))?;
        Self::from_entries(entries.into_iter().map(|e| (e.id, e.study)).collect())
    }

    /// Parse a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| FolioError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to the JSON array form accepted by [`ContentTable::from_reader`].
    pub fn to_json_pretty(&self) -> FolioResult<String> {
        let entries: Vec<Entry> = self
            .entries
            .iter()
            .map(|(id, study)| Entry {
                id: id.clone(),
                study: study.clone(),
            })
            .collect();
        serde_json::to_string_pretty(&entries).map_err(|e| FolioError::json("case study", e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in key order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Case study for `id`.
    pub fn lookup(&self, id: &str) -> Option<&CaseStudy> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    /// Id following `id` in key order, wrapping at the end. An unknown id is followed by the
    /// first key. `None` only for an empty table.
    pub fn next_id(&self, id: &str) -> Option<&str> {
        let next = self.position(id).map_or(0, |i| i + 1) % self.entries.len().max(1);
        self.entries.get(next).map(|(id, _)| id.as_str())
    }

    /// Resolve a project route into the page it renders.
    pub fn page(&self, id: Option<&str>) -> ProjectPage<'_> {
        let Some(id) = id else {
            tracing::warn!("project route without an id");
            return ProjectPage::NotFound;
        };
        let Some(i) = self.position(id) else {
            tracing::warn!(id, "no case study for project id");
            return ProjectPage::NotFound;
        };
        let (id, study) = (self.entries[i].0.as_str(), &self.entries[i].1);
        let next = self.next_id(id).and_then(|nid| {
            self.lookup(nid).map(|s| NextProject {
                id: nid,
                title: &s.title,
            })
        });
        match next {
            Some(next) => ProjectPage::Found { id, study, next },
            None => ProjectPage::NotFound,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == id)
    }
}

/// Teaser for the "next project" link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NextProject<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

impl NextProject<'_> {
    /// Route of the next project's page.
    pub fn target(&self) -> NavTarget {
        NavTarget::project(self.id)
    }
}

/// What a case-study route renders.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectPage<'a> {
    Found {
        id: &'a str,
        study: &'a CaseStudy,
        next: NextProject<'a>,
    },
    NotFound,
}

impl ProjectPage<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Link back to the project showcase.
    pub fn back_target(&self) -> NavTarget {
        NavTarget::Anchor(BACK_ANCHOR.to_owned())
    }

    /// Page title, or the not-found fallback.
    pub fn headline(&self) -> &str {
        match self {
            Self::Found { study, .. } => &study.title,
            Self::NotFound => NOT_FOUND_MESSAGE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/case_study.rs"]
mod tests;
