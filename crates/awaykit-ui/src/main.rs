#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Demo page entry point; native builds only explain how to serve it.

#[cfg(target_arch = "wasm32")]
fn main() {
    awaykit_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    native::print_usage(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, Write};

    use awaykit_ui::demo::{click_label, swipe_label};

    /// Describe the demo and how to build it for the browser.
    pub(super) fn print_usage(out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "awaykit demo: a \"{}\" card and a \"{}\" panel.",
            click_label(false),
            swipe_label(false)
        )?;
        writeln!(
            out,
            "It runs in the browser only; serve it with `trunk serve` \
             or build with `cargo build --target wasm32-unknown-unknown`."
        )
    }

}
