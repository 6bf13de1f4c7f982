use ccub::config::Config;
use ccub::core::details::{
    create_details_file, details_dir, details_file, read_details, relative_details_file,
};
use ccub::core::render::{Template, render_log};
use ccub::core::update::{Insert, Start};
use ccub::errors::{AppError, ErrorClass};
use ccub::models::{Assembly, TimePeriod};
use ccub::store::LogStore;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{at, closed, entry, ymd};

fn store_in(dir: &TempDir) -> LogStore {
    LogStore::new(dir.path().join("log").join("buildlog.yaml"))
}

// ------------------------------------------------
// Store
// ------------------------------------------------

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(store_in(&dir).load().unwrap().is_empty());
}

#[test]
fn test_save_creates_directory_and_reloads() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut e = entry(
        Assembly::LeftWing,
        ymd(2022, 2, 8),
        vec![closed("1:00PM", "3:15PM", 135), TimePeriod::open("4:00PM".into())],
    );
    e.title = Some("Rear spar".into());
    e.tags = vec!["rivets".into(), "spar".into()];

    store.save(std::slice::from_ref(&e)).unwrap();
    assert_eq!(store.load().unwrap(), vec![e]);

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("2022-Feb-08"));
    assert!(text.contains("left wing"));
    assert!(text.contains("2022-Feb/2022-Feb-08.md"));
}

#[test]
fn test_failed_update_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store
        .update(Insert {
            entry: entry(Assembly::Gear, ymd(2022, 2, 8), vec![closed("1:00PM", "2:00PM", 60)]),
            overwrite: false,
        })
        .unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    let err = store
        .update(Insert {
            entry: entry(Assembly::Skin, ymd(2022, 2, 8), vec![]),
            overwrite: false,
        })
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Conflict);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_second_start_does_not_add_open_period() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let today = ymd(2022, 2, 8);

    store
        .update(Start {
            assembly: Some(Assembly::Powerplant),
            now: at(today, 9, 0),
        })
        .unwrap();
    assert!(
        store
            .update(Start {
                assembly: None,
                now: at(today, 9, 10),
            })
            .is_err()
    );

    let entries = store.load().unwrap();
    assert_eq!(entries[0].work_periods.len(), 1);
}

#[test]
fn test_corrupt_file_is_a_format_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "log_entry:\n  - assembly: hangar\n").unwrap();

    assert!(matches!(store.load().unwrap_err(), AppError::Format(_)));
}

// ------------------------------------------------
// Detail files
// ------------------------------------------------

#[test]
fn test_details_paths() {
    let base = std::path::Path::new("log");
    let d = ymd(2022, 2, 8);
    assert_eq!(details_dir(base, d), base.join("2022-Feb"));
    assert_eq!(details_file(base, d), base.join("2022-Feb").join("2022-Feb-08.md"));
    assert_eq!(relative_details_file(d), "2022-Feb/2022-Feb-08.md");
}

#[test]
fn test_create_details_file_keeps_existing_notes() {
    let dir = TempDir::new().unwrap();
    let d = ymd(2022, 2, 8);

    let (path, written) = create_details_file(dir.path(), d, "# Notes\n", false).unwrap();
    assert!(written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Notes\n");

    fs::write(&path, "drilled the spar").unwrap();
    let (_, written) = create_details_file(dir.path(), d, "# Notes\n", false).unwrap();
    assert!(!written);
    assert_eq!(read_details(dir.path(), d).unwrap().as_deref(), Some("drilled the spar"));

    let (_, written) = create_details_file(dir.path(), d, "", true).unwrap();
    assert!(written);
    assert_eq!(read_details(dir.path(), d).unwrap().as_deref(), Some(""));
}

#[test]
fn test_create_details_fails_when_month_is_a_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2022-Feb"), "not a directory").unwrap();

    assert!(create_details_file(dir.path(), ymd(2022, 2, 8), "", false).is_err());
}

#[test]
fn test_read_details_missing_is_none() {
    let dir = TempDir::new().unwrap();
    assert_eq!(read_details(dir.path(), ymd(2022, 2, 8)).unwrap(), None);
}

// ------------------------------------------------
// Render
// ------------------------------------------------

#[test]
fn test_render_appends_details_or_placeholder() {
    let dir = TempDir::new().unwrap();
    let mut feb8 = entry(
        Assembly::Avionics,
        ymd(2022, 2, 8),
        vec![closed("1:00PM", "2:00PM", 60), closed("3:00PM", "3:45PM", 45)],
    );
    feb8.title = Some("Panel layout".into());
    feb8.tags = vec!["efis".into(), "wiring".into()];
    let feb7 = entry(Assembly::Gear, ymd(2022, 2, 7), vec![closed("9:00AM", "9:30AM", 30)]);

    create_details_file(dir.path(), feb8.date, "Cut the panel.", false).unwrap();

    let template = Template::parse(
        "## {{ date }} [{{assembly}}] {{title}}\n{{work_periods}} = {{total_minutes}} ({{ total_time }}) #{{tags}}\n",
    )
    .unwrap();
    let mut out = Vec::new();
    render_log(&mut out, &template, &[feb8, feb7], dir.path()).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "## 2022-Feb-08 [avionics] Panel layout\n\
         1:00PM-2:00PM (60 min), 3:00PM-3:45PM (45 min) = 105 (01h 45m) #efis, wiring\n\
         Cut the panel.\n\
         ## 2022-Feb-07 [gear] \n\
         9:00AM-9:30AM (30 min) = 30 (00h 30m) #\n\
         No details\n"
    );
}

#[test]
fn test_unknown_template_field_is_rejected() {
    let err = Template::parse("{{ date }} {{ pilot }}").unwrap_err();
    assert!(matches!(err, AppError::Template(ref m) if m.contains("pilot")));
}

// ------------------------------------------------
// Config
// ------------------------------------------------

#[test]
fn test_config_defaults_fill_missing_fields() {
    let cfg = Config::parse("editor: vim\n").unwrap();
    assert_eq!(cfg.editor.as_deref(), Some("vim"));
    assert_eq!(cfg.logs_dir, "log");
    assert_eq!(cfg.logs_path(), std::path::Path::new("log").join("buildlog.yaml"));
    assert_eq!(Config::parse("{}").unwrap(), Config::default());
}
