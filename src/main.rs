fn main() {
    nsr::app::cli::run();
}
