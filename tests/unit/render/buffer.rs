use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_buffer_is_transparent_and_sized() {
    let buf = PixelBuffer::new(canvas(3, 2));
    assert_eq!(buf.data().len(), 3 * 2 * 4);
    assert!(buf.data().iter().all(|&b| b == 0));
    assert_eq!(buf.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(3, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
}

#[test]
fn fill_row_touches_only_that_row() {
    let mut buf = PixelBuffer::new(canvas(4, 3));
    buf.fill_row(1, Rgba8::opaque(10, 20, 30));
    buf.fill_row(7, Rgba8::WHITE);

    for x in 0..4 {
        assert_eq!(buf.pixel(x, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(x, 1), Some([10, 20, 30, 255]));
        assert_eq!(buf.pixel(x, 2), Some([0, 0, 0, 0]));
    }
}

#[test]
fn straight_copy_undoes_premultiplication() {
    let mut buf = PixelBuffer::new(canvas(1, 1));
    buf.fill_row(0, Rgba8::new(200, 100, 0, 128));
    let premul = buf.pixel(0, 0).unwrap();
    assert_eq!(premul[3], 128);
    assert!(premul[0] < 200);

    let straight = buf.to_straight_rgba8();
    assert!((i16::from(straight[0]) - 200).abs() <= 1);
    assert!((i16::from(straight[1]) - 100).abs() <= 1);
    assert_eq!(straight[2], 0);
    assert_eq!(straight[3], 128);
}
