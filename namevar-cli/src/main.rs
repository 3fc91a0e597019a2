//! Binary entrypoint for namevar-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = namevar_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
