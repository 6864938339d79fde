fn main() {
    spm_mirror::app::cli::run();
}
