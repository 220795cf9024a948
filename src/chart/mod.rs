//! Chart rasterization for the analysis output.

pub mod renderer;

use image::{Rgb, RgbImage};

pub mod colors {
    use image::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
}

/// Draw a horizontal line, clipped to the image bounds.
pub(crate) fn draw_horizontal_line(img: &mut RgbImage, y: u32, x1: u32, x2: u32, color: Rgb<u8>) {
    let (start, end) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let img_width = img.width();
    let img_height = img.height();

    if y < img_height {
        for x in start..=end.min(img_width - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw a line segment between two points, clipped to the image bounds.
pub(crate) fn draw_segment(
    img: &mut RgbImage,
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    color: Rgb<u8>,
) {
    let img_width = img.width() as i64;
    let img_height = img.height() as i64;

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);
    loop {
        if (0..img_width).contains(&x) && (0..img_height).contains(&y) {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
