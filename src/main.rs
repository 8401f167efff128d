fn main() {
    hlb::app::cli::run();
}
