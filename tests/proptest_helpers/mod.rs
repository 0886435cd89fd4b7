#![allow(dead_code)]

use jointlabel::label::LabelDocument;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// An arbitrary label document: up to 8 joints (duplicate names collapse
/// through the upsert), up to 5 tags, and an optional box. Box corners stay
/// in i16 range so widths and heights cannot overflow.
pub fn arb_document() -> impl Strategy<Value = LabelDocument> {
    let joint = ("[a-z]{1,8}", -5000..5000i32, -5000..5000i32);
    let tags = proptest::collection::btree_map("[a-z]{1,8}", "[ -~]{1,16}", 0..5);
    let bbox = proptest::option::of((any::<i16>(), any::<i16>(), any::<i16>(), any::<i16>()));

    (proptest::collection::vec(joint, 0..8), tags, bbox).prop_map(|(joints, tags, bbox)| {
        let mut doc = LabelDocument::new("image.png");
        for (name, x, y) in joints {
            doc.upsert_joint(&name, x, y);
        }
        for (name, value) in tags {
            doc.upsert_tag(&name, value);
        }
        if let Some((x1, y1, x2, y2)) = bbox {
            doc.set_box(x1 as i32, y1 as i32, x2 as i32, y2 as i32);
        }
        doc
    })
}
