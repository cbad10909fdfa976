use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "simd")] {
        mod simd;
        #[cfg(test)]
        pub(crate) mod soft;
        pub(crate) use simd::perm_bits;
    } else {
        mod soft;
        pub(crate) use soft::perm_bits;
    }
}
