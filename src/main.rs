fn main() {
    if let Err(e) = chess_rules::shell::run_shell_loop() {
        eprintln!("io error: {e}");
        std::process::exit(1);
    }
}
