use miette::Result;

/// Main entry point for the ripples CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    ripples::run()
}
