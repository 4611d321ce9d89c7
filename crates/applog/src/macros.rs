//! Emit macros dispatching to the process-wide logger.
//!
//! Each severity macro accepts format arguments, optionally preceded by
//! `inspect = <frame>` to attach stack and snippet context:
//!
//! ```
//! use applog::FrameContext;
//!
//! applog::info!("listening on port {}", 8080);
//! applog::debug!(inspect = FrameContext::capture(), "entering hot path");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __callsite {
    () => {
        $crate::CallSite {
            pathname: ::core::file!(),
            lineno: ::core::line!(),
            function: $crate::__function!(),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, inspect = $frame:expr, $($arg:tt)+) => {
        $crate::logger().log(
            $level,
            ::core::format_args!($($arg)+),
            &$crate::__callsite!(),
            ::core::option::Option::Some(&$frame),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::logger().log(
            $level,
            ::core::format_args!($($arg)+),
            &$crate::__callsite!(),
            ::core::option::Option::None,
        )
    };
}

/// Emits a DEBUG record.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Debug, $($arg)+) };
}

/// Emits an INFO record.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Info, $($arg)+) };
}

/// Emits a WARNING record.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Warning, $($arg)+) };
}

/// Emits an ERROR record.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Error, $($arg)+) };
}

/// Emits a CRITICAL record.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Critical, $($arg)+) };
}

/// Emits an ERROR record for `error`, appending its display, cause chain,
/// and a stack capture of the call site after the rendered line.
///
/// With a single argument the error's display doubles as the message.
#[macro_export]
macro_rules! exception {
    ($error:expr, $($arg:tt)+) => {
        $crate::logger().log_error(
            &$error,
            ::core::format_args!($($arg)+),
            &$crate::__callsite!(),
        )
    };
    ($error:expr $(,)?) => {
        match &$error {
            error => $crate::logger().log_error(
                error,
                ::core::format_args!("{}", error),
                &$crate::__callsite!(),
            ),
        }
    };
}
