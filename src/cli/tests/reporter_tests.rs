use super::*;
use reporter::Reporter;
use tsprops_common::VisibilityType;
use tsprops_program::NodeIndex;
use tsprops_rename::{RenameContext, RenameDirective, RenameEdit};

fn rename(context: &mut RenameContext, node: u32, original: &str, renamed: &str, visibility: VisibilityType) {
    context.insert(
        NodeIndex(node),
        RenameDirective::Identifier {
            new_name: renamed.to_string(),
        },
        RenameEdit {
            node: NodeIndex(node),
            symbol: None,
            original: original.to_string(),
            renamed: renamed.to_string(),
            visibility,
        },
    );
}

#[test]
fn summary_groups_repeated_renames() {
    let mut context = RenameContext::new(NodeIndex(0), "index.ts");
    rename(&mut context, 1, "y", "_private_y", VisibilityType::Private);
    rename(&mut context, 2, "helper", "_internal_helper", VisibilityType::Internal);
    rename(&mut context, 3, "y", "_private_y", VisibilityType::Private);

    let text = Reporter::new(false).render(&[context]);
    assert_eq!(
        text,
        "index.ts: 3 renames\n  y -> _private_y (private) x2\n  helper -> _internal_helper (internal)\n"
    );
}

#[test]
fn empty_file_still_gets_a_header() {
    let context = RenameContext::new(NodeIndex(0), "util.ts");
    assert_eq!(Reporter::new(false).format_file(&context), "util.ts: 0 renames\n");
}
