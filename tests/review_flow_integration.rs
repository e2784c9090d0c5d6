use std::path::{Path, PathBuf};

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use litriage::{
    core::{
        msg::{review::ReviewMsg, Msg},
        state::ExportOptions,
    },
    domain::{
        review::SessionPhase,
        table::{EXCLUSION, INCLUSION, TITLE},
    },
    infrastructure::{config::Config, tabular},
    AppState, RawMsg, Runtime,
};

const REFS: &str = "\
Title,Publication Title,Publication Year,Abstract Note
Third,C Journal,2022,Audit committees and shareholders
First,A Journal,2020,Ethics of board decisions
Second,B Journal,2021,Corporate governance in practice
";

fn write_refs(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join("refs.csv");
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn runtime_for(path: &Path, export: ExportOptions) -> Result<Runtime> {
    let mut runtime = Runtime::new(AppState::new(Config::defaults()?, export));
    runtime.send_msg(Msg::Review(ReviewMsg::Open(path.to_path_buf())));
    runtime.run_update_cycle();
    Ok(runtime)
}

fn press(runtime: &mut Runtime, c: char) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::NONE,
    )));
    runtime.run_update_cycle();
}

fn current_title(runtime: &Runtime) -> Option<String> {
    runtime
        .state()
        .review
        .session
        .as_ref()
        .and_then(|s| s.current())
        .and_then(|r| r.get(TITLE))
        .map(str::to_string)
}

#[test]
fn test_rows_are_reviewed_in_publication_title_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_refs(dir.path(), REFS)?;
    let mut runtime = runtime_for(&path, ExportOptions::default())?;

    assert_eq!(runtime.state().phase(), SessionPhase::Reviewing);
    assert_eq!(current_title(&runtime).as_deref(), Some("First"));

    press(&mut runtime, 'i');
    assert_eq!(current_title(&runtime).as_deref(), Some("Second"));

    press(&mut runtime, 'b');
    assert_eq!(current_title(&runtime).as_deref(), Some("Third"));

    press(&mut runtime, 'd');
    assert_eq!(runtime.state().phase(), SessionPhase::Complete);
    assert_eq!(
        runtime.state().system.status_message.as_deref(),
        Some("[To Discuss] Third - all rows handled")
    );
    Ok(())
}

#[test]
fn test_already_handled_rows_are_skipped_on_open() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_refs(
        dir.path(),
        "Title,Publication Title,Publication Year,Inclusion,Exclusion\n\
         Done,A,2020,Exclude,Not Board\n\
         Pending,B,2021,,\n\
         Blank,C,2022,   ,\n",
    )?;
    let runtime = runtime_for(&path, ExportOptions::default())?;

    assert_eq!(current_title(&runtime).as_deref(), Some("Pending"));
    let progress = runtime.state().review.session.as_ref().map(|s| s.progress());
    assert_eq!(
        progress.map(|p| p.to_string()).as_deref(),
        Some("1 of 3 rows handled")
    );
    Ok(())
}

#[test]
fn test_export_writes_decisions_to_target() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_refs(dir.path(), REFS)?;
    let target = dir.path().join("out.csv");
    let mut runtime = runtime_for(
        &path,
        ExportOptions {
            target: Some(target.clone()),
            format: None,
        },
    )?;

    for key in ['i', 'e', 'o', 's'] {
        press(&mut runtime, key);
    }

    assert_eq!(runtime.state().review.last_export.as_deref(), Some(target.as_path()));
    let table = tabular::load(&target, &[TITLE])?;
    let decisions: Vec<(&str, &str, &str)> = table
        .records()
        .map(|r| (r.value(TITLE), r.value(INCLUSION), r.value(EXCLUSION)))
        .collect();
    assert_eq!(
        decisions,
        vec![
            ("First", "Yes", ""),
            ("Second", "Exclude", "Not Ethics"),
            ("Third", "Exclude", "Other"),
        ]
    );
    Ok(())
}

#[test]
fn test_export_before_any_decision_keeps_source_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_refs(dir.path(), REFS)?;
    let mut runtime = runtime_for(&path, ExportOptions::default())?;

    press(&mut runtime, 's');

    let exported = runtime
        .state()
        .review
        .last_export
        .clone()
        .expect("export path recorded");
    assert_ne!(exported, path);
    assert!(exported
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("-refs-litreview.csv")));
    assert_eq!(std::fs::read_to_string(&path)?, REFS);
    Ok(())
}

#[test]
fn test_missing_required_column_blocks_review() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_refs(dir.path(), "Publication Title,Publication Year\nA,2020\n")?;
    let mut runtime = runtime_for(&path, ExportOptions::default())?;

    assert_eq!(runtime.state().phase(), SessionPhase::Uninitialized);
    let error = runtime.state().review.load_error.clone().unwrap_or_default();
    assert!(error.contains("Title"), "unexpected error: {error}");

    // decisions are ignored without a session
    press(&mut runtime, 'i');
    assert_eq!(runtime.state().phase(), SessionPhase::Uninitialized);
    Ok(())
}

#[test]
fn test_unsupported_file_type_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("refs.bib");
    std::fs::write(&path, "@article{x}")?;
    let runtime = runtime_for(&path, ExportOptions::default())?;

    let error = runtime.state().review.load_error.clone().unwrap_or_default();
    assert!(error.contains("unsupported file type"), "unexpected error: {error}");
    Ok(())
}
