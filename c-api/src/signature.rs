use crate::error::status;
use ecdsa_asn1_der::{decode_signature_fixed, decode_signature_separate, encode_signature};

/// Encodes the raw components `r` and `s`, both `rs_len` bytes wide, as two DER INTEGERs.
///
/// `*asn_sig_len` holds the capacity of `asn_sig` on entry and the number of bytes written on success.
///
/// # Safety
///
/// - `r` and `s` must be valid for reads of `rs_len` bytes.
/// - `asn_sig` must be valid for writes of `*asn_sig_len` bytes and must not overlap `r` or `s`.
#[no_mangle]
pub unsafe extern "C" fn ecdsa_rs_to_asn1(
    r: *const u8,
    s: *const u8,
    rs_len: usize,
    asn_sig: *mut u8,
    asn_sig_len: *mut usize,
) -> status {
    let capacity = len_cell!(asn_sig_len);
    let r = ptr_to_buffer!(@u8 r, rs_len);
    let s = ptr_to_buffer!(@u8 s, rs_len);
    let out = ptr_to_buffer!(mut @u8 asn_sig, capacity);

    let written = err_check!(encode_signature(r, s, out));
    *asn_sig_len = written;

    status::Success
}

/// Decodes two consecutive DER INTEGERs into `r` and `s`.
///
/// `*r_len` and `*s_len` hold the capacities of `r` and `s` on entry. Each component is written
/// right-aligned and zero-padded; on success the cells receive the unpadded widths.
///
/// # Safety
///
/// - `asn1` must be valid for reads of `asn1_len` bytes.
/// - `r` and `s` must be valid for writes of `*r_len` and `*s_len` bytes, and must not overlap
///   each other or `asn1`.
#[no_mangle]
pub unsafe extern "C" fn asn1_to_ecdsa_rs_sep(
    asn1: *const u8,
    asn1_len: usize,
    r: *mut u8,
    r_len: *mut usize,
    s: *mut u8,
    s_len: *mut usize,
) -> status {
    let r_capacity = len_cell!(r_len);
    let s_capacity = len_cell!(s_len);
    let der = ptr_to_buffer!(@u8 asn1, asn1_len);
    let r_out = ptr_to_buffer!(mut @u8 r, r_capacity);
    let s_out = ptr_to_buffer!(mut @u8 s, s_capacity);

    let decoded = err_check!(decode_signature_separate(der, r_out, s_out));
    *r_len = decoded.r_len;
    *s_len = decoded.s_len;

    status::Success
}

/// Decodes two consecutive DER INTEGERs into the fixed `r || s` layout.
///
/// `rs_len` must be even; each half receives one zero-padded component.
///
/// # Safety
///
/// - `asn1` must be valid for reads of `asn1_len` bytes.
/// - `rs` must be valid for writes of `rs_len` bytes and must not overlap `asn1`.
#[no_mangle]
pub unsafe extern "C" fn asn1_to_ecdsa_rs(asn1: *const u8, asn1_len: usize, rs: *mut u8, rs_len: usize) -> status {
    let der = ptr_to_buffer!(@u8 asn1, asn1_len);
    let rs = ptr_to_buffer!(mut @u8 rs, rs_len);

    err_check!(decode_signature_fixed(der, rs));

    status::Success
}
