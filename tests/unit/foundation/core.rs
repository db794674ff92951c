use super::*;

#[test]
fn canvas_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(950, 950).unwrap();
    assert_eq!(c.rgba8_len(), 950 * 950 * 4);
}

#[test]
fn rgba_from_hex_is_opaque() {
    let c = Rgba8::from_hex(0x39424b);
    assert_eq!(c, Rgba8::opaque(0x39, 0x42, 0x4b));
    assert_eq!(c.a, 0xff);
    assert_eq!(Rgba8::WHITE, Rgba8::from_hex(0xffffff));
}
