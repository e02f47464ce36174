//! Call-site logging macros for [`LogRouter`](crate::LogRouter).
//!
//! The message is formatted with `format!` before it reaches the router,
//! and the source location comes from `file!()` / `line!()`:
//!
//! ```ignore
//! sink_info!(router, "Planner", "This is an info message: {}", 42);
//! sink_warn!(router, "CONTROLLER", "Warning: value is {}", 3.14);
//! ```

#[macro_export]
macro_rules! sink_log {
    ($router:expr, $module:expr, $severity:expr, $($arg:tt)*) => {{
        $router.log(
            $module,
            $severity,
            $crate::SourceLocation::new(file!(), line!()),
            format!($($arg)*),
        )
    }};
}

#[macro_export]
macro_rules! sink_debug {
    ($router:expr, $module:expr, $($arg:tt)*) => {
        $crate::sink_log!($router, $module, $crate::Severity::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! sink_info {
    ($router:expr, $module:expr, $($arg:tt)*) => {
        $crate::sink_log!($router, $module, $crate::Severity::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! sink_warn {
    ($router:expr, $module:expr, $($arg:tt)*) => {
        $crate::sink_log!($router, $module, $crate::Severity::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! sink_error {
    ($router:expr, $module:expr, $($arg:tt)*) => {
        $crate::sink_log!($router, $module, $crate::Severity::Error, $($arg)*)
    };
}
