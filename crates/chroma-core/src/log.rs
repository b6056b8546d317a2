/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging macros used when the `log` feature is disabled.
//!
//! They accept the same arguments as their `log` counterparts and
//! expand to nothing, so call sites never need a `cfg`.

// #[macro_export] is required to make macros works across crates
// but it always put the macro in the crate root.
// #[doc(hidden)] + "pub use" is a workaround to namespace a macro.
pub use crate::{__debug as debug, __error as error, __info as info, __trace as trace, __warn as warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __error {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __info {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}
