//! Config file precedence: global defaults, local override, CLI flags.

use hoverline::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};
use hoverline::theme::ThemeMode;
use tempfile::tempdir;

#[test]
fn local_override_wins_over_global_for_valued_options() {
    let dir = tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".hoverlinerc");

    save_config_flags(
        &global,
        &ConfigFlags {
            watch: true,
            theme: Some(ThemeMode::Dark),
            gutter: Some(4),
        },
    )
    .unwrap();
    save_config_flags(
        &local,
        &ConfigFlags {
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        },
    )
    .unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert!(merged.watch);
    assert_eq!(merged.theme, Some(ThemeMode::Light));
    assert_eq!(merged.gutter, Some(4));
}

#[test]
fn cli_flags_win_over_files() {
    let dir = tempdir().unwrap();
    let global = dir.path().join("config");
    save_config_flags(
        &global,
        &ConfigFlags {
            theme: Some(ThemeMode::Light),
            gutter: Some(8),
            ..ConfigFlags::default()
        },
    )
    .unwrap();

    let cli = parse_flag_tokens(&[
        "hoverline".to_string(),
        "--theme".to_string(),
        "dark".to_string(),
        "file.txt".to_string(),
    ]);
    let effective = load_config_flags(&global).unwrap().union(&cli);
    assert_eq!(effective.theme, Some(ThemeMode::Dark));
    assert_eq!(effective.gutter, Some(8));
}

#[test]
fn saved_file_is_reloadable_comments_and_all() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    let flags = ConfigFlags {
        watch: true,
        theme: Some(ThemeMode::Dark),
        gutter: Some(6),
    };
    save_config_flags(&path, &flags).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with('#'), "header comment expected");

    assert_eq!(load_config_flags(&path).unwrap(), flags);
}
