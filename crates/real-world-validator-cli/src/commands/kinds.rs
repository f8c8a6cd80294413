use colored::Colorize;
use real_world_validator::Registry;

pub fn execute() {
    println!("{}", "Registered kinds:".green().bold());
    for (kind, handler) in Registry::builtin().kinds() {
        let messages = if handler.messages.is_some() {
            "localized"
        } else {
            "-"
        };
        println!(
            "  {:<16} {:<24} {}",
            kind.cyan(),
            handler.failure_code,
            messages.dimmed()
        );
    }
}
