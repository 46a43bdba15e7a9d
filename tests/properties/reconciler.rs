//! Property tests for manifest diffing and the skip overlay.

use std::collections::BTreeSet;

use proptest::prelude::*;

use structuresmith::domain::ports::FsError;
use structuresmith::{ContentSource, DesiredFile, Manifest, ManifestEntry, Reconciler};

fn destination() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,6}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

fn path_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(destination(), 0..12)
}

fn desired(paths: &BTreeSet<String>) -> Vec<DesiredFile> {
    paths
        .iter()
        .map(|p| DesiredFile::new(p, ContentSource::Content(String::new())))
        .collect()
}

fn manifest(paths: &BTreeSet<String>) -> Manifest {
    Manifest::new("test").with_entries(paths.iter().map(ManifestEntry::new))
}

fn paths_of(files: &[DesiredFile]) -> BTreeSet<String> {
    files.iter().map(|f| f.destination().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: New and Kept partition the desired set; Deleted is M \ D.
    #[test]
    fn property_diff_partitions_desired_set(m in path_set(), d in path_set()) {
        let diff = Reconciler::diff(&manifest(&m), &desired(&d));

        let new = paths_of(&diff.new);
        let kept = paths_of(&diff.kept);
        let deleted: BTreeSet<String> = diff.deleted.iter().map(|e| e.path().to_string()).collect();

        prop_assert!(new.is_disjoint(&kept));
        prop_assert_eq!(new.union(&kept).cloned().collect::<BTreeSet<_>>(), d.clone());
        prop_assert_eq!(new, d.difference(&m).cloned().collect::<BTreeSet<_>>());
        prop_assert_eq!(deleted, m.difference(&d).cloned().collect::<BTreeSet<_>>());
        prop_assert!(diff.skipped.is_empty());
    }

    /// PROPERTY: diffing against the manifest written for D yields Kept = D.
    #[test]
    fn property_diff_is_idempotent(d in path_set()) {
        let files = desired(&d);
        let diff = Reconciler::diff(&manifest(&d), &files);

        prop_assert!(diff.new.is_empty());
        prop_assert!(diff.deleted.is_empty());
        prop_assert_eq!(diff.kept, files);
    }

    /// PROPERTY: with overwrite off, exactly the existing paths are skipped.
    #[test]
    fn property_skip_overlay_only_skips_existing(
        m in path_set(),
        d in path_set(),
        on_disk in path_set(),
    ) {
        let files: Vec<DesiredFile> = desired(&d)
            .into_iter()
            .map(|f| f.with_overwrite(Some(false)))
            .collect();
        let diff = Reconciler::diff(&manifest(&m), &files);
        let deleted_before = diff.deleted.clone();

        let overlaid = Reconciler::apply_skip_overlay(diff, |p| Ok(on_disk.contains(p))).unwrap();

        let skipped = paths_of(&overlaid.skipped);
        prop_assert_eq!(skipped, d.intersection(&on_disk).cloned().collect::<BTreeSet<_>>());
        for file in overlaid.to_write() {
            prop_assert!(!on_disk.contains(file.destination()));
        }
        prop_assert_eq!(&overlaid.deleted, &deleted_before);
        prop_assert_eq!(overlaid.total(), d.len() + m.difference(&d).count());
    }

    /// PROPERTY: files that may be overwritten are never skipped.
    #[test]
    fn property_overwrite_on_never_skips(d in path_set(), on_disk in path_set()) {
        let diff = Reconciler::diff(&manifest(&BTreeSet::new()), &desired(&d));

        let overlaid = Reconciler::apply_skip_overlay(diff, |p| Ok(on_disk.contains(p))).unwrap();

        prop_assert!(overlaid.skipped.is_empty());
        prop_assert_eq!(paths_of(&overlaid.new), d);
    }

    /// PROPERTY: a NotFound from the existence check means "does not exist".
    #[test]
    fn property_not_found_counts_as_absent(d in path_set()) {
        let files: Vec<DesiredFile> = desired(&d)
            .into_iter()
            .map(|f| f.with_overwrite(Some(false)))
            .collect();
        let diff = Reconciler::diff(&manifest(&BTreeSet::new()), &files);

        let overlaid = Reconciler::apply_skip_overlay(diff, |p| {
            Err(FsError::NotFound(std::path::PathBuf::from(p)))
        })
        .unwrap();

        prop_assert!(overlaid.skipped.is_empty());
        prop_assert_eq!(overlaid.new.len(), d.len());
    }
}
