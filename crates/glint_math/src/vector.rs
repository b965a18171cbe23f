use crate::Vec3;

/// Scale `v` to unit length.
///
/// A zero-length vector comes back as the zero vector instead of NaN.
/// Degenerate inputs (a camera looking straight up, a collapsed triangle)
/// therefore propagate as zero directions rather than poisoning every
/// later computation.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        Vec3::ZERO
    }
}

/// Reflect `v` about the normal `n`: `v - 2(v·n)n`.
///
/// `n` is expected to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
