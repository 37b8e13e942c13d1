fn main() {
    vibe_debugging::run();
}
