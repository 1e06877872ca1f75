//! Binary entry point for the directory clearer.

fn main() {
    dirsweep::run();
}
