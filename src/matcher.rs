use ndarray::ArrayView1;

use crate::hist::Histogram;

/// 待评分的候选图片
pub struct Candidate {
    /// 记录 ID
    pub id: i64,
    /// 文件名
    pub filename: String,
    /// 归一化直方图
    pub histogram: Histogram,
}

/// 计算两个等长向量的皮尔逊相关系数，范围 [-1, 1]
///
/// 任一向量方差为零时返回 1.0，与常见直方图比较实现保持一致
pub fn correlation(va: &[f32], vb: &[f32]) -> f32 {
    debug_assert_eq!(va.len(), vb.len());

    let a = ArrayView1::from(va).mapv(f64::from);
    let b = ArrayView1::from(vb).mapv(f64::from);
    let da = &a - a.mean().unwrap_or(0.0);
    let db = &b - b.mean().unwrap_or(0.0);

    let num = da.dot(&db);
    let den = (da.dot(&da) * db.dot(&db)).sqrt();
    if den > f64::EPSILON { (num / den) as f32 } else { 1.0 }
}

/// 按相似度从高到低排列候选图片，返回前 count 个 `(文件名, 相似度)`
///
/// 分数相同时按记录 ID 升序排列，保证结果稳定
pub fn rank(query: &Histogram, candidates: Vec<Candidate>, count: usize) -> Vec<(String, f32)> {
    let mut scored: Vec<_> = candidates
        .into_iter()
        .map(|c| (correlation(query, &c.histogram), c))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
    scored.into_iter().take(count).map(|(score, c)| (c.filename, score)).collect()
}
