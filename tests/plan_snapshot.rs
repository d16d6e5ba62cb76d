//! Snapshots of complete revalidation plans for representative mutations.

mod support;

use atelier::domain::types::ArtType;
use atelier::revalidation::{RevalidationPlan, RevalidationRequest};

use support::locales;

fn render(plan: &RevalidationPlan) -> String {
    let mut lines = plan.paths.clone();
    lines.push("--".to_string());
    lines.extend(plan.tags.iter().map(|tag| tag.to_string()));
    lines.join("\n")
}

#[test]
fn snapshot_standalone_drawing() {
    let request = RevalidationRequest::artwork(ArtType::Drawing, "sunset", None);
    let plan = RevalidationPlan::from_request(&request, &locales(&["en", "pt"]));
    insta::assert_snapshot!("standalone_drawing", render(&plan));
}

#[test]
fn snapshot_move_between_collections() {
    let request = RevalidationRequest::artwork(ArtType::Painting, "study-1", Some("later-works"))
        .with_previous(Some("study-1"), Some("early-works"));
    let plan = RevalidationPlan::from_request(&request, &locales(&["en"]));
    insta::assert_snapshot!("move_between_collections", render(&plan));
}

#[test]
fn snapshot_full_sweep() {
    let plan = RevalidationPlan::full_sweep(&locales(&["en", "pt"]));
    insta::assert_snapshot!("full_sweep", render(&plan));
}
