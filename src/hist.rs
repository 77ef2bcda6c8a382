use anyhow::{Result, bail};
use image::GrayImage;

/// 灰度直方图的分桶数量
pub const HIST_BINS: usize = 256;

/// 归一化后的灰度直方图
pub type Histogram = [f32; HIST_BINS];

/// 解码图片并计算其灰度直方图
pub fn histogram_from_bytes(data: &[u8]) -> Result<Histogram, image::ImageError> {
    let img = image::load_from_memory(data)?;
    Ok(intensity_histogram(&img.to_luma8()))
}

/// 统计每个灰度级的像素数量，然后做 L2 归一化，
/// 使得不同尺寸的图片可以互相比较
pub fn intensity_histogram(img: &GrayImage) -> Histogram {
    let mut hist = [0f32; HIST_BINS];
    for pixel in img.pixels() {
        hist[pixel.0[0] as usize] += 1.0;
    }
    normalize(&mut hist);
    hist
}

/// L2 归一化，全零向量保持不变
fn normalize(hist: &mut [f32]) {
    let norm = hist.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in hist.iter_mut() {
            *v /= norm;
        }
    }
}

/// 将直方图编码为小端字节序的二进制数据
pub fn encode_histogram(hist: &Histogram) -> Vec<u8> {
    let mut blob = Vec::with_capacity(HIST_BINS * 4);
    for v in hist {
        blob.extend_from_slice(&v.to_le_bytes());
    }
    blob
}

/// 从二进制数据中解码直方图
pub fn decode_histogram(blob: &[u8]) -> Result<Histogram> {
    if blob.len() != HIST_BINS * 4 {
        bail!("无效的直方图长度: {}", blob.len());
    }
    let mut hist = [0f32; HIST_BINS];
    for (v, chunk) in hist.iter_mut().zip(blob.chunks_exact(4)) {
        *v = f32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes"));
    }
    Ok(hist)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageBuffer, ImageFormat, Luma};

    use super::*;

    fn solid_image(level: u8) -> GrayImage {
        ImageBuffer::from_pixel(100, 100, Luma([level]))
    }

    fn png_bytes(img: &GrayImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn solid_image_is_single_spike() {
        let hist = intensity_histogram(&solid_image(128));
        assert!((hist[128] - 1.0).abs() < 1e-6);
        let rest: f32 =
            hist.iter().enumerate().filter(|(i, _)| *i != 128).map(|(_, v)| v).sum();
        assert_eq!(rest, 0.0);
    }

    #[test]
    fn histogram_is_l2_normalized() {
        // 两个灰度级各占一半
        let img: GrayImage = ImageBuffer::from_fn(100, 100, |x, _| {
            if x < 50 { Luma([10]) } else { Luma([200]) }
        });
        let hist = intensity_histogram(&img);
        let norm: f32 = hist.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((hist[10] - hist[200]).abs() < 1e-6);
    }

    #[test]
    fn same_bytes_same_histogram() {
        let data = png_bytes(&solid_image(77));
        let h1 = histogram_from_bytes(&data).unwrap();
        let h2 = histogram_from_bytes(&data).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn invalid_image_is_rejected() {
        assert!(histogram_from_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn blob_roundtrip() {
        let hist = intensity_histogram(&solid_image(3));
        let blob = encode_histogram(&hist);
        assert_eq!(blob.len(), HIST_BINS * 4);
        assert_eq!(decode_histogram(&blob).unwrap(), hist);
    }

    #[test]
    fn truncated_blob_is_rejected() {
        assert!(decode_histogram(&[0u8; 10]).is_err());
    }
}
