//! Quadtree image compression with a percentage threshold.
//!
//! A square region becomes all black if at least `t` percent of its pixels
//! are black, all white if at least `t` percent are white, and is split into
//! quadrants otherwise.

use crate::templates::prelude::*;

pub struct ImageCompression;

static INFO: TemplateInfo = TemplateInfo {
    id: "4586",
    title: "Image compression",
    category: Category::DivideAndConquer,
    input: &[
        Field::int("w").until("0"),
        Field::int("t"),
        Field::word("row").repeat("w"),
    ],
    output: &[Field::line("image").until_end()],
    constraints: &["w is a power of two, 1 <= w <= 64", "0 <= t <= 100", "rows are w digits 0 or 1"],
    samples: &[Sample {
        input: "4\n75\n1110\n1111\n0001\n0000\n8\n60\n11110000\n11010000\n10110000\n11110101\n00001111\n00001011\n00000111\n00001111\n0\n",
        output: "Image 1:\n1111\n1111\n0000\n0000\nImage 2:\n11110000\n11110000\n11110000\n11110000\n00001111\n00001111\n00001111\n00001111\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Image {
    pub threshold: u32,
    pub pixels: Grid<bool>,
}

fn compress(src: &Grid<bool>, dst: &mut Grid<bool>, threshold: u32, r: usize, c: usize, d: usize) {
    let area = (d * d) as u32;
    let mut black = 0u32;
    for i in r..r + d {
        for j in c..c + d {
            black += u32::from(src[(i, j)]);
        }
    }
    let fill = if black * 100 >= threshold * area {
        Some(true)
    } else if (area - black) * 100 >= threshold * area {
        Some(false)
    } else {
        None
    };
    match fill {
        Some(v) => {
            for i in r..r + d {
                for j in c..c + d {
                    dst[(i, j)] = v;
                }
            }
        }
        None if d > 1 => {
            let h = d / 2;
            for (dr, dc) in [(0, 0), (0, h), (h, 0), (h, h)] {
                compress(src, dst, threshold, r + dr, c + dc, h);
            }
        }
        None => {}
    }
}

impl Template for ImageCompression {
    type Input = Vec<Image>;
    type Output = Vec<Grid<bool>>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Image>, InputError> {
        let mut images = Vec::new();
        loop {
            let w = sc.next_in("w", 0..=64usize)?;
            if w == 0 {
                break;
            }
            if !w.is_power_of_two() {
                return Err(InputError::constraint("w", format!("{w} is not a power of two")));
            }
            let threshold = sc.next_in("t", 0..=100u32)?;
            let mut pixels = Grid::new(w, w, false);
            for r in 0..w {
                let row = sc.word_of_len("row", w)?;
                if !row.bytes().all(|b| b == b'0' || b == b'1') {
                    return Err(InputError::constraint("row", "pixels must be 0 or 1"));
                }
                for (c, b) in row.bytes().enumerate() {
                    pixels[(r, c)] = b == b'1';
                }
            }
            images.push(Image { threshold, pixels });
        }
        Ok(images)
    }

    fn solve(&self, images: &Vec<Image>) -> Vec<Grid<bool>> {
        images
            .iter()
            .map(|img| {
                let w = img.pixels.rows();
                let mut out = Grid::new(w, w, false);
                compress(&img.pixels, &mut out, img.threshold, 0, 0, w);
                out
            })
            .collect()
    }

    fn render(&self, output: &Vec<Grid<bool>>, out: &mut String) {
        for (i, img) in output.iter().enumerate() {
            out.push_str(&format!("Image {}:\n", i + 1));
            for r in 0..img.rows() {
                out.extend(img.row(r).iter().map(|&b| if b { '1' } else { '0' }));
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threshold_blackens_everything() {
        let pixels = Grid::new(2, 2, false);
        let out = ImageCompression.solve(&vec![Image { threshold: 0, pixels }]);
        assert!(out[0].iter().all(|&b| b));
    }
}
