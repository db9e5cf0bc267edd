#[cfg(not(feature = "debug_log"))]
macro_rules! debug_log {
    () => {};
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug_log")]
macro_rules! debug_log {
    () => {
        ::log::debug!(target: "ecdsa_asn1_der", "|");
    };
    ($($arg:tt)*) => {
        ::log::debug!(target: "ecdsa_asn1_der", $($arg)*);
    };
}
