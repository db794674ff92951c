use std::io::Cursor;

use image::Rgba;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_session").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("art")).unwrap();
    dir
}

fn write_png(path: &Path, w: u32, h: u32) {
    let img = RgbaImage::from_pixel(w, h, Rgba([90, 90, 90, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, buf).unwrap();
}

fn write_fixture(dir: &Path, session: &str) -> PathBuf {
    write_png(&dir.join("art/imp.png"), 32, 32);
    write_png(&dir.join("art/drunk.png"), 32, 32);
    write_png(&dir.join("art/shroud.png"), 20, 30);
    std::fs::write(dir.join("font.ttf"), b"not a font").unwrap();
    std::fs::write(
        dir.join("roles.json"),
        r#"[
            {"id": "imp", "name": "Imp", "roleType": "demon", "icon": "/imp.png"},
            {"id": "drunk", "name": "Drunk", "image": "drunk.png", "team": "outsider"}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("script.json"),
        r#"[{"id": "_meta", "name": "Tiny", "author": "me"}, "imp"]"#,
    )
    .unwrap();
    let path = dir.join("session.json");
    std::fs::write(&path, session).unwrap();
    path
}

const SESSION: &str = r#"{
    "config": {"token_size": 64},
    "font": "font.ttf",
    "shroud": "art/shroud.png",
    "roles": "roles.json",
    "assets": "art",
    "script": "script.json",
    "players": [
        {"name": "Ann", "role": "imp", "reminders": [{"icon": "drunk", "label": "Drunk"}]},
        {"name": "Ben", "role": "drunk", "dead": true}
    ]
}"#;

#[test]
fn loads_relative_paths_and_checks_the_script() {
    let dir = scratch_dir("load");
    let path = write_fixture(&dir, SESSION);

    let session = Session::from_path(&path).unwrap();
    assert_eq!(session.config().token_size, 64);
    assert_eq!(session.config().width, 950);
    assert_eq!(session.players().len(), 2);
    assert!(session.players()[1].dead);
    assert_eq!(session.script().map(|s| s.name.as_str()), Some("Tiny"));
    assert_eq!(session.off_script_roles(), ["drunk"]);

    assert_eq!(session.assets().root(), dir.join("art"));
    let img = crate::AssetLookup::role_image(session.assets(), "imp").unwrap();
    assert_eq!(img.dimensions(), (32, 32));
}

#[test]
fn unknown_roles_are_rejected_at_load() {
    let dir = scratch_dir("unknown_role");
    let path = write_fixture(
        &dir,
        r#"{"font": "font.ttf", "shroud": "art/shroud.png", "roles": "roles.json",
            "players": [{"name": "Cy", "role": "baron"}]}"#,
    );
    let err = Session::from_path(&path).unwrap_err();
    assert!(matches!(err, GrimError::Asset(_)));
    assert!(err.to_string().contains("baron"));

    let path = write_fixture(
        &dir,
        r#"{"font": "font.ttf", "shroud": "art/shroud.png", "roles": "roles.json",
            "players": [{"name": "Cy", "role": "imp",
                         "reminders": [{"icon": "baron", "label": "x"}]}]}"#,
    );
    assert!(matches!(
        Session::from_path(&path).unwrap_err(),
        GrimError::Asset(_)
    ));
}

#[test]
fn empty_player_lists_and_unknown_fields_are_rejected() {
    let dir = scratch_dir("invalid");
    let path = write_fixture(
        &dir,
        r#"{"font": "font.ttf", "shroud": "art/shroud.png", "roles": "roles.json", "players": []}"#,
    );
    assert!(matches!(
        Session::from_path(&path).unwrap_err(),
        GrimError::Validation(_)
    ));

    let path = write_fixture(
        &dir,
        r#"{"font": "font.ttf", "shroud": "s.png", "roles": "r.json", "players": [], "extra": 1}"#,
    );
    assert!(matches!(
        Session::from_path(&path).unwrap_err(),
        GrimError::Serde(_)
    ));
}

#[test]
fn missing_files_are_reported() {
    assert!(Session::from_path("target/unit_session/does-not-exist.json").is_err());

    let dir = scratch_dir("missing_shroud");
    let path = write_fixture(
        &dir,
        r#"{"font": "font.ttf", "shroud": "nope.png", "roles": "roles.json",
            "players": [{"name": "Ann", "role": "imp"}]}"#,
    );
    let err = Session::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("nope.png"));
}

#[test]
fn into_grim_needs_a_real_font() {
    let dir = scratch_dir("bad_font");
    let path = write_fixture(&dir, SESSION);
    let session = Session::from_path(&path).unwrap();
    assert!(session.into_grim().is_err());
}
