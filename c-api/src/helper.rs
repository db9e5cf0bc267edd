macro_rules! err_check {
    ($res:expr) => {
        err_check!($res, $crate::error::status::Failure)
    };
    ($res:expr, $err_value:expr) => {
        match $res {
            Ok(val) => val,
            Err(e) => {
                ::ffi_helpers::error_handling::update_last_error(e);
                return $err_value;
            }
        }
    };
}

macro_rules! ptr_to_buffer {
    (@u8 $u8_ptr:expr, $size:expr) => {{
        ptr_to_buffer!(@impl from_raw_parts, $u8_ptr, $size)
    }};
    (mut @u8 $u8_ptr_mut:expr, $size:expr) => {{
        ptr_to_buffer!(@impl from_raw_parts_mut, $u8_ptr_mut, $size)
    }};
    (@impl $slice_method:ident, $ptr:expr, $size:expr) => {{
        use ::anyhow::Context;

        ::ffi_helpers::null_pointer_check!($ptr, $crate::error::status::Failure);
        // slices may not span more than isize::MAX bytes
        let size: usize = $size;
        err_check!(isize::try_from(size).context(concat!("invalid size parameter ", stringify!($size))));
        ::core::slice::$slice_method($ptr, size)
    }};
}

/// Reads an in/out length cell, failing the call on a null pointer.
macro_rules! len_cell {
    ($len_ptr:expr) => {{
        ::ffi_helpers::null_pointer_check!($len_ptr, $crate::error::status::Failure);
        *$len_ptr
    }};
}
