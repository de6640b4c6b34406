mod common;

use common::*;
use std::sync::Arc;
use tactile::{
    ExternalRef, FormattingPipeline, Row, SequenceBreak, SequenceProperties, SequenceRun,
    SheetSide, VecSink,
};

#[test]
fn test_document_pages_are_gapless_per_counter() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    pipeline.run(
        [
            simple_run("body", 3),
            simple_run("body", 2),
            simple_run("body", 4),
        ],
        &mut sink,
    )?;

    let numbers: Vec<u32> = sink.pages().iter().map(|p| p.page_number).collect();
    assert_eq!(numbers, (1..=9).collect::<Vec<u32>>());
    Ok(())
}

#[test]
fn test_duplex_sheet_parity_across_page_breaks() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    pipeline.run([simple_run("body", 3), simple_run("body", 3)], &mut sink)?;

    // Six content pages over three sheets: F B F B F B.
    let sides: Vec<SheetSide> = sink.pages().iter().map(|p| p.sheet_side).collect();
    assert_eq!(
        sides,
        vec![
            SheetSide::Front,
            SheetSide::Back,
            SheetSide::Front,
            SheetSide::Back,
            SheetSide::Front,
            SheetSide::Back,
        ]
    );
    Ok(())
}

#[test]
fn test_duplex_to_simplex_transition_forces_sheet_break() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    // Both sequences declare AUTO; the duplex mismatch alone must upgrade.
    pipeline.run([simple_run("body", 2), simple_run("notes", 1)], &mut sink)?;

    let notes_page = &sink.pages()[2];
    assert_eq!(notes_page.sheet_side, SheetSide::Front);
    Ok(())
}

#[test]
fn test_auto_break_avoids_blank_back_side() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    // Sequence A leaves a duplex front side occupied; B's page dimensions
    // differ, forcing a sheet break out of two AUTO hints.
    pipeline.run([simple_run("body", 1), simple_run("wide", 1)], &mut sink)?;

    assert_eq!(sink.pages().len(), 2);
    assert!(sink.pages().iter().all(|p| !p.is_blank));
    // The unused back side does not consume a page number either.
    assert_eq!(sink.pages()[1].page_number, 2);
    Ok(())
}

#[test]
fn test_explicit_sheet_break_inserts_paginated_blank() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    pipeline.run(
        [
            breaking_run("body", SequenceBreak::Auto, SequenceBreak::Sheet, 1),
            simple_run("body", 1),
        ],
        &mut sink,
    )?;

    assert_eq!(sink.pages().len(), 3);
    let blank = &sink.pages()[1];
    assert!(blank.is_blank);
    assert_eq!(blank.sheet_side, SheetSide::Back);
    assert_eq!(blank.page_number, 2);
    assert!(blank.rows.is_empty());
    Ok(())
}

#[test]
fn test_break_decisions_are_never_weaker_than_hints() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let hints = [
        SequenceBreak::Auto,
        SequenceBreak::Page,
        SequenceBreak::Sheet,
        SequenceBreak::Volume,
    ];
    for after in hints {
        for before in hints {
            let mut pipeline = FormattingPipeline::new(standard_masters());
            let mut sink = VecSink::new();
            // One duplex page before the boundary leaves a sheet open, so
            // every decision class has an observable footprint.
            let summary = pipeline.run(
                [
                    breaking_run("body", SequenceBreak::Auto, after, 1),
                    breaking_run("body", before, SequenceBreak::Auto, 1),
                ],
                &mut sink,
            )?;

            match after.max(before) {
                SequenceBreak::Volume => {
                    // Paginated filler closes the sheet, then numbering
                    // restarts in the new volume.
                    assert_eq!(summary.volumes, 2, "{after:?}/{before:?}");
                    assert_eq!(sink.pages().len(), 3);
                    assert!(sink.pages()[1].is_blank);
                    let last = &sink.pages()[2];
                    assert_eq!(last.page_number, 1);
                    assert_eq!(last.sheet_side, SheetSide::Front);
                }
                SequenceBreak::Sheet => {
                    assert_eq!(sink.pages().len(), 3, "{after:?}/{before:?}");
                    assert!(sink.pages()[1].is_blank);
                    let last = &sink.pages()[2];
                    assert_eq!(last.page_number, 3);
                    assert_eq!(last.sheet_side, SheetSide::Front);
                }
                SequenceBreak::Auto | SequenceBreak::Page => {
                    // A plain page break continues on the open back side.
                    assert_eq!(sink.pages().len(), 2, "{after:?}/{before:?}");
                    let last = &sink.pages()[1];
                    assert_eq!(last.page_number, 2);
                    assert_eq!(last.sheet_side, SheetSide::Back);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_external_reference_survives_full_pipeline() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let tag: ExternalRef = Arc::new(String::from("dtb:smil#par-4"));
    let row = Row::builder("⠞⠁⠛⠛⠑⠙")
        .row_spacing(1.0)
        .external_reference(tag.clone())
        .build();
    let run = SequenceRun::new(SequenceProperties::builder("body").build(), vec![vec![row]]);

    let mut pipeline = FormattingPipeline::new(standard_masters());
    let mut sink = VecSink::new();
    pipeline.run([run], &mut sink)?;

    let held = sink.pages()[0].rows[0]
        .external_reference()
        .expect("reference should pass through");
    assert!(Arc::ptr_eq(held, &tag));
    assert_eq!(
        held.downcast_ref::<String>().map(String::as_str),
        Some("dtb:smil#par-4")
    );
    Ok(())
}
