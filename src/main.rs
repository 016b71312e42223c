use gitkit::{cli::run, utils::print_error};

fn main() {
    if let Err(err) = run() {
        print_error("Operation failed", &err.to_string());

        std::process::exit(1);
    }
}
