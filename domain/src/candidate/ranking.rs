//! Candidate ranking

use super::entities::Candidate;
use super::list::CandidateList;
use crate::resource::{PackageRef, ResourceFile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Bonus for files that share the context file's package
pub const PRIMARY_PACKAGE_BONUS: u32 = 2;

/// Bonus for files below a source root
pub const SOURCE_ROOT_BONUS: u32 = 1;

/// Root folders treated as source locations
pub const DEFAULT_SOURCE_ROOTS: [&str; 2] = ["src", "app"];

/// Tunable parts of the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingRules {
    /// Project-relative path prefixes that earn [`SOURCE_ROOT_BONUS`].
    ///
    /// Matching is a plain string prefix test, so `"app"` also matches
    /// `"application/..."`.
    pub source_roots: Vec<String>,
}

impl Default for RankingRules {
    fn default() -> Self {
        Self {
            source_roots: DEFAULT_SOURCE_ROOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RankingRules {
    pub fn is_source_path(&self, relative: &str) -> bool {
        self.source_roots
            .iter()
            .any(|root| relative.starts_with(root.as_str()))
    }
}

/// Everything ranking needs to know about where the literal was found.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext<'a> {
    /// Package containing the context file, if any
    pub context_package: Option<&'a PackageRef>,
    /// Root that relative paths are computed against
    pub project_root: Option<&'a Path>,
    pub rules: &'a RankingRules,
}

/// Path of `path` relative to `root`, `/`-separated.
///
/// Returns `None` when there is no root or `path` is outside it.
pub fn relative_path(path: &Path, root: Option<&Path>) -> Option<String> {
    let relative = path.strip_prefix(root?).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Build the ordered candidate list for one domain.
///
/// `files` is the resolver output in its original order; `locate` reports
/// the package a file belongs to. Unsupported formats are dropped, repeated
/// files collapse to their first occurrence, and a lone candidate starts
/// out included.
pub fn build_candidates<I, F>(files: I, ctx: &RankingContext<'_>, mut locate: F) -> CandidateList
where
    I: IntoIterator<Item = ResourceFile>,
    F: FnMut(&ResourceFile) -> Option<PackageRef>,
{
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for file in files {
        if !file.is_supported() || !seen.insert(file.path().to_path_buf()) {
            continue;
        }

        let package = locate(&file);
        let relative = relative_path(file.path(), ctx.project_root);
        let mut candidate = Candidate::new(file);

        match (ctx.context_package, package) {
            (Some(primary), Some(package)) if *primary == package => {
                candidate.mark_primary(package);
                candidate.add_weight(PRIMARY_PACKAGE_BONUS);
            }
            (_, package) => candidate.set_containing_package(package),
        }

        if relative
            .as_deref()
            .is_some_and(|rel| ctx.rules.is_source_path(rel))
        {
            candidate.add_weight(SOURCE_ROOT_BONUS);
        }
        candidate.set_relative_path(relative);

        candidates.push(candidate);
    }

    // Vec::sort_by is stable: equal weights keep resolver order
    candidates.sort_by(|a, b| b.weight().cmp(&a.weight()));

    if let [only] = candidates.as_mut_slice() {
        only.set_included(true);
    }

    CandidateList::new(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ==================== Helpers ====================

    fn root() -> PathBuf {
        PathBuf::from("/project")
    }

    fn app_bundle() -> PackageRef {
        PackageRef::new("AppBundle", "/project/src/AppBundle")
    }

    fn vendor_bundle() -> PackageRef {
        PackageRef::new("VendorBundle", "/project/vendor/acme/VendorBundle")
    }

    /// Package lookup by path prefix over a fixed set of packages
    fn locator(packages: Vec<PackageRef>) -> impl FnMut(&ResourceFile) -> Option<PackageRef> {
        move |file| packages.iter().find(|p| p.contains(file.path())).cloned()
    }

    fn build(files: &[&str], context_package: Option<&PackageRef>) -> CandidateList {
        let root = root();
        let rules = RankingRules::default();
        let ctx = RankingContext {
            context_package,
            project_root: Some(&root),
            rules: &rules,
        };
        let files = files.iter().map(|f| ResourceFile::new(root.join(f)));
        build_candidates(files, &ctx, locator(vec![app_bundle(), vendor_bundle()]))
    }

    fn names(list: &CandidateList) -> Vec<String> {
        list.iter().map(|c| c.file().file_name()).collect()
    }

    // ==================== Relative paths ====================

    #[test]
    fn test_relative_path_inside_root() {
        let rel = relative_path(Path::new("/project/src/a.yml"), Some(Path::new("/project")));
        assert_eq!(rel.as_deref(), Some("src/a.yml"));
    }

    #[test]
    fn test_relative_path_outside_root_or_no_root() {
        assert!(relative_path(Path::new("/elsewhere/a.yml"), Some(Path::new("/project"))).is_none());
        assert!(relative_path(Path::new("/project/a.yml"), None).is_none());
        assert!(relative_path(Path::new("/project"), Some(Path::new("/project"))).is_none());
    }

    #[test]
    fn test_source_root_is_plain_prefix() {
        let rules = RankingRules::default();
        assert!(rules.is_source_path("src/trans/a.yml"));
        assert!(rules.is_source_path("app/Resources/translations/a.yml"));
        assert!(rules.is_source_path("application/a.yml"));
        assert!(!rules.is_source_path("vendor/src/a.yml"));
        assert!(!rules.is_source_path("translations/a.yml"));
    }

    // ==================== Filtering ====================

    #[test]
    fn test_unsupported_formats_excluded() {
        let list = build(
            &[
                "translations/messages.en.yml",
                "translations/messages.en.php",
                "translations/messages.en.json",
                "translations/messages.de.xlf",
            ],
            None,
        );
        assert_eq!(names(&list), vec!["messages.en.yml", "messages.de.xlf"]);
        assert!(list.iter().all(|c| c.file().is_supported()));
    }

    #[test]
    fn test_duplicate_files_collapse() {
        let list = build(
            &["translations/messages.en.yml", "translations/messages.en.yml"],
            None,
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_resolver_output() {
        let list = build(&[], Some(&app_bundle()));
        assert!(list.is_empty());
        assert!(list.collect_included().is_empty());
    }

    // ==================== Weights ====================

    #[test]
    fn test_primary_bonus_applied_once() {
        let list = build(&["src/AppBundle/Resources/translations/messages.en.yml"], Some(&app_bundle()));
        let candidate = list.get(0).unwrap();
        assert!(candidate.is_primary_package());
        assert_eq!(candidate.containing_package(), Some(&app_bundle()));
        // +2 primary, +1 src root
        assert_eq!(candidate.weight(), 3);
    }

    #[test]
    fn test_other_package_recorded_without_bonus() {
        let list = build(
            &["vendor/acme/VendorBundle/Resources/translations/messages.en.yml"],
            Some(&app_bundle()),
        );
        let candidate = list.get(0).unwrap();
        assert!(!candidate.is_primary_package());
        assert_eq!(candidate.containing_package().map(|p| p.name()), Some("VendorBundle"));
        assert_eq!(candidate.weight(), 0);
    }

    #[test]
    fn test_no_context_package_means_no_primary() {
        let list = build(
            &[
                "src/AppBundle/Resources/translations/messages.en.yml",
                "translations/messages.en.yml",
            ],
            None,
        );
        assert!(list.iter().all(|c| !c.is_primary_package()));
        // Files outside any package are not "primary" just because both sides are None
        let plain = list.iter().find(|c| c.containing_package().is_none()).unwrap();
        assert_eq!(plain.weight(), 0);
    }

    #[test]
    fn test_source_root_bonus_alone() {
        let list = build(&["app/Resources/translations/messages.en.yml"], None);
        assert_eq!(list.get(0).unwrap().weight(), 1);
    }

    #[test]
    fn test_file_outside_project_root_has_no_path_bonus() {
        let root = root();
        let rules = RankingRules::default();
        let ctx = RankingContext {
            context_package: None,
            project_root: Some(&root),
            rules: &rules,
        };
        let list = build_candidates(
            vec![ResourceFile::new("/other/src/messages.en.yml")],
            &ctx,
            |_| None,
        );
        let candidate = list.get(0).unwrap();
        assert!(candidate.relative_path().is_none());
        assert_eq!(candidate.weight(), 0);
    }

    // ==================== Ordering ====================

    #[test]
    fn test_primary_and_vendor_scenario() {
        let root = root();
        let rules = RankingRules::default();
        let primary = app_bundle();
        let ctx = RankingContext {
            context_package: Some(&primary),
            project_root: Some(&root),
            rules: &rules,
        };
        let a = ResourceFile::new("/project/src/trans/a.yml");
        let b = ResourceFile::new("/project/vendor/trans/b.yml");
        let list = build_candidates(vec![b, a], &ctx, |file| {
            if file.path().ends_with("a.yml") {
                Some(app_bundle())
            } else {
                Some(vendor_bundle())
            }
        });

        assert_eq!(names(&list), vec!["a.yml", "b.yml"]);
        assert_eq!(list.get(0).unwrap().weight(), 3);
        assert_eq!(list.get(1).unwrap().weight(), 0);
        assert!(!list.get(0).unwrap().is_included());
        assert!(!list.get(1).unwrap().is_included());
    }

    #[test]
    fn test_stable_order_for_equal_weights() {
        let list = build(
            &[
                "translations/z.en.yml",
                "src/AppBundle/Resources/translations/m.en.yml",
                "translations/a.en.yml",
                "translations/k.en.xlf",
            ],
            Some(&app_bundle()),
        );
        assert_eq!(
            names(&list),
            vec!["m.en.yml", "z.en.yml", "a.en.yml", "k.en.xlf"]
        );
        let weights: Vec<_> = list.iter().map(|c| c.weight()).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
    }

    // ==================== Default selection ====================

    #[test]
    fn test_single_candidate_is_included() {
        let list = build(&["translations/c.xlf"], None);
        assert_eq!(names(&list), vec!["c.xlf"]);
        assert!(list.get(0).unwrap().is_included());
    }

    #[test]
    fn test_single_supported_among_unsupported_is_included() {
        let list = build(&["translations/c.php", "translations/c.en.yml"], None);
        assert_eq!(list.len(), 1);
        assert!(list.get(0).unwrap().is_included());
    }

    #[test]
    fn test_multiple_candidates_start_excluded() {
        let list = build(&["translations/a.en.yml", "translations/b.en.yml"], None);
        assert!(list.iter().all(|c| !c.is_included()));
    }
}
