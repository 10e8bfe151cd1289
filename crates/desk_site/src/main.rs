//! Binary entrypoint for the browser-hosted desktop bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    desk_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `desk_site_app` for wasm32 with the `csr` feature and load it on a page providing #desk-section."
    );
}
