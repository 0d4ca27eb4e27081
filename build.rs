//! Build script for the optional N-API addon.
//!
//! With the `node` feature enabled, `napi-build` configures linking so the
//! cdylib loads as a native Node.js module. Without it there is nothing to do.

fn main() {
    #[cfg(feature = "node")]
    napi_build::setup();
}
