/*!
    Row averaging.
*/

/// Bytes handled per unrolled step.
const BATCH: usize = 8;

#[inline(always)]
fn average(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) >> 1) as u8
}

/**
    Write the per-byte floor average of `a` and `b` into `dst`.

    Rows are processed in fixed-size batches with a byte-wise tail, so any
    length is handled.

    # Panics

    Panics if the three slices differ in length.
*/
pub fn merge(dst: &mut [u8], a: &[u8], b: &[u8]) {
    assert_eq!(a.len(), b.len(), "merged rows differ in length");
    assert_eq!(dst.len(), a.len(), "destination row differs in length");

    let mut out = dst.chunks_exact_mut(BATCH);
    let mut lhs = a.chunks_exact(BATCH);
    let mut rhs = b.chunks_exact(BATCH);

    for ((out, lhs), rhs) in (&mut out).zip(&mut lhs).zip(&mut rhs) {
        for i in 0..BATCH {
            out[i] = average(lhs[i], rhs[i]);
        }
    }

    let tail = out
        .into_remainder()
        .iter_mut()
        .zip(lhs.remainder())
        .zip(rhs.remainder());
    for ((out, &lhs), &rhs) in tail {
        *out = average(lhs, rhs);
    }
}
