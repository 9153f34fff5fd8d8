use image::{imageops, Rgba, RgbaImage};

/**
 * Stack per-colormap sample rows into a single RGBA image, one column per
 * colormap with the sample position running down the column, then rotate
 * the whole matrix 90 degrees counter-clockwise.
 *
 * After rotation the image is `sample count` pixels wide and `row count`
 * pixels tall; the rotation puts the alphabetically last colormap in the
 * top row.
 */
pub fn assemble_atlas(rows: &[Vec<[u8; 4]>]) -> RgbaImage {
    assert!(!rows.is_empty(), "`rows` must hold at least one colormap!");
    let sample_count = rows[0].len();
    assert!(sample_count > 0, "sample rows must not be empty!");
    for row in rows {
        assert_eq!(
            row.len(),
            sample_count,
            "all sample rows must have the same length!"
        );
    }

    let mut stacked = RgbaImage::new(rows.len() as u32, sample_count as u32);
    for (x, y, pixel) in stacked.enumerate_pixels_mut() {
        *pixel = Rgba(rows[x as usize][y as usize]);
    }
    imageops::rotate270(&stacked)
}
