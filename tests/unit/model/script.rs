use super::*;

#[test]
fn classifies_every_entry_shape() {
    let entries: Vec<ScriptEntry> = serde_json::from_str(
        r#"[
            {"id": "_meta", "name": "Trouble Brewing", "author": "TPI"},
            "washerwoman",
            {"id": "librarian"},
            {
                "id": "hatter",
                "name": "Hatter",
                "team": "townsfolk",
                "ability": "Tea party.",
                "image": ["a.png", "b.png"],
                "firstNight": 12,
                "reminders": ["Tea Party"]
            }
        ]"#,
    )
    .unwrap();

    assert!(matches!(&entries[0], ScriptEntry::Metadata(m) if m.name == "Trouble Brewing"));
    assert_eq!(entries[1], ScriptEntry::OfficialId("washerwoman".to_string()));
    assert_eq!(
        entries[2],
        ScriptEntry::DeprecatedIdOnly("librarian".to_string())
    );
    let ScriptEntry::FullCharacter(def) = &entries[3] else {
        panic!("expected a full character");
    };
    assert_eq!(def.team, RoleType::Townsfolk);
    assert_eq!(def.first_night, Some(12));
    assert_eq!(def.reminders, vec!["Tea Party".to_string()]);
}

#[test]
fn parse_collects_roles_and_meta() {
    let script = Script::parse(
        r#"[
            "washerwoman",
            {"id": "_meta", "name": "Mini", "author": "me"},
            {"id": "librarian"},
            {"id": "hatter", "name": "Hatter", "team": "townsfolk", "ability": "x"}
        ]"#,
    )
    .unwrap();

    assert_eq!(script.name, "Mini");
    assert_eq!(script.author, "me");
    assert_eq!(
        script.roles,
        vec![
            ScriptRole {
                id: "washerwoman".to_string(),
                official: true
            },
            ScriptRole {
                id: "librarian".to_string(),
                official: true
            },
            ScriptRole {
                id: "hatter".to_string(),
                official: false
            },
        ]
    );
    assert!(script.contains("hatter"));
    assert!(!script.contains("imp"));
}

#[test]
fn missing_meta_gives_empty_name_and_author() {
    let script = Script::parse(r#"["imp"]"#).unwrap();
    assert_eq!(script.name, "");
    assert_eq!(script.author, "");
}

#[test]
fn multiple_meta_entries_are_rejected() {
    let err = Script::parse(
        r#"[
            {"id": "_meta", "name": "a", "author": "b"},
            {"id": "_meta", "name": "c", "author": "d"}
        ]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("multiple _meta"));
}

#[test]
fn malformed_entries_are_rejected() {
    assert!(Script::parse("[42]").is_err());
    assert!(Script::parse(r#"[{"name": "no id"}]"#).is_err());
    assert!(Script::parse(r#"[{"id": "x", "name": "X", "team": "wizard", "ability": ""}]"#).is_err());
}
