use crate::consts::BIT_PERM;

/// The software (scalar) PermBits layer: an independent 32-bit bit gather
/// per cipher word, driven by the specification tables.
#[inline(always)]
pub(crate) fn perm_bits(cipher: &mut [u32; 4]) {
    let mut out = [0u32; 4];

    for (w, (dst, table)) in cipher.iter().zip(out.iter_mut().zip(&BIT_PERM)) {
        for (i, &src) in table.iter().enumerate() {
            *dst |= ((w >> src) & 1) << i;
        }
    }

    *cipher = out;
}
