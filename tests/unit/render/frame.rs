use super::*;

#[test]
fn premultiplied_frames_unpremultiply_on_export() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![100, 50, 0, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let img = frame.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [199, 100, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert!(!frame.is_blank());
}

#[test]
fn mismatched_length_is_a_render_error() {
    let frame = FrameRGBA {
        width: 3,
        height: 3,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(frame.to_rgba_image().is_err());
}

#[test]
fn save_png_round_trips_dimensions() {
    let path = std::path::PathBuf::from("target")
        .join("unit_render")
        .join("frame.png");
    let frame = FrameRGBA {
        width: 4,
        height: 3,
        data: [10u8, 20, 30, 255].repeat(12),
        premultiplied: true,
    };
    frame.save_png(&path).unwrap();
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(3, 2).0, [10, 20, 30, 255]);
}
